mod state;
mod status_check;

pub use state::AppState;
pub use status_check::{MalformedRecord, StatusCheck, StatusCheckCreate};
