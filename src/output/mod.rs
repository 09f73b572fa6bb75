pub mod format;
mod response;

pub use format::TextOutput;
pub use response::{
    map_cmd_result_to_json, map_cmd_result_to_text, print_json_result, print_text, print_text_error,
};
