//! Character-by-character reveal of an already-received answer.

use super::view_model::{revealed_prefix, ChatVm, TypingState, REVEAL_START_DELAY_MS};
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

/// Start revealing `full_text` for one assistant message.
///
/// Bumping the message's epoch first guarantees at most one live loop per
/// id: an older loop notices the stale epoch on its next tick and exits
/// without touching state. The loop also stops ticking once the whole text
/// is shown, so no timer fires after completion.
pub fn start_reveal(vm: ChatVm, message_id: String, full_text: String, interval_ms: u32) {
    let epoch = vm.bump_epoch(&message_id);
    vm.set_typing(
        &message_id,
        TypingState {
            text: String::new(),
            is_typing: true,
        },
    );

    spawn_local(async move {
        TimeoutFuture::new(REVEAL_START_DELAY_MS).await;

        let total = full_text.chars().count();
        let mut shown = 0usize;
        while shown < total {
            TimeoutFuture::new(interval_ms).await;
            if vm.epoch(&message_id) != epoch {
                return;
            }
            shown += 1;
            vm.set_typing(
                &message_id,
                TypingState {
                    text: revealed_prefix(&full_text, shown).to_string(),
                    is_typing: shown < total,
                },
            );
        }

        if vm.epoch(&message_id) == epoch {
            vm.set_typing(
                &message_id,
                TypingState {
                    text: full_text,
                    is_typing: false,
                },
            );
        }
    });
}
