//! Dashboard: upload pane and chat pane side by side with a draggable
//! splitter. Clearing the upload session also clears the conversation.

use crate::domain::chat::ui::{view_model::ChatVm, ChatPane};
use crate::domain::upload::ui::{view_model::UploadVm, UploadPane};
use crate::shared::components::split_pane::SplitPane;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let upload_vm = UploadVm::new();
    let chat_vm = ChatVm::new();

    let on_cleared = Callback::new(move |()| chat_vm.clear());

    view! {
        <div class="dashboard">
            <SplitPane
                left=move || {
                    view! { <UploadPane vm=upload_vm on_cleared=on_cleared /> }.into_any()
                }
                right=move || view! { <ChatPane vm=chat_vm /> }.into_any()
            />
        </div>
    }
}
