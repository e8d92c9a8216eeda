pub mod prompts;
pub mod render;

pub use prompts::{
    SessionAction, prompt_action, prompt_activity, prompt_food, prompt_macro_split,
    prompt_remove_index, prompt_user_data,
};
pub use render::{
    display_calories, display_catalog, display_food_log, display_progress, display_summary,
    display_targets, display_totals,
};
