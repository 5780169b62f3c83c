pub mod argon2;
pub mod jwt;

pub use self::argon2::Argon2CredentialHasher;
pub use self::jwt::JwtTokenService;
