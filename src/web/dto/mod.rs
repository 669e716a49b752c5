//! Data transfer objects for the Web API.

mod request;
mod response;

pub use request::{
    LoginRequest, NotificationListQuery, RegisterRequest, RejectRequest,
    UpdateAvailabilityRequest, UpdateDetailsRequest, UpdatePasswordRequest,
};
pub use response::{
    ApiResponse, AuthResponse, MeResponse, MentorInfo, NotificationInfo, UserInfo,
};
