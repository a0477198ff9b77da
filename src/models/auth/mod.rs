pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::CurrentUser;
pub use requests::{ChangePasswordRequest, LoginRequest};
pub use responses::{LoginResponse, ProfileResponse, RefreshTokenResponse};
