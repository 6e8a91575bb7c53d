mod gate;

pub use gate::{
    GENERIC_LOGIN_FAILURE, INVALID_CREDENTIALS, IdentityGate, LoginFailure, RouteAccess,
    RouteGuard,
};
