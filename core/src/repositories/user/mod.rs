mod mock;
mod r#trait;

pub use mock::MockUserRepository;
pub use r#trait::UserRepository;
