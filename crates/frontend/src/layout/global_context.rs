use leptos::prelude::*;

/// Layout state shared by the shell components
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
