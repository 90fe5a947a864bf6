pub mod split_pane;
