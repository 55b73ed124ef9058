mod requests;
mod types;

pub use requests::CreateGroupRequest;
pub use types::Group;
