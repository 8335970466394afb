//! User Use Cases

mod create_user;
mod delete_user;
mod get_all_users;
mod get_user_by_id;
mod update_user;

pub use create_user::{CreateUserInput, CreateUserUseCase};
pub use delete_user::DeleteUserUseCase;
pub use get_all_users::GetAllUsersUseCase;
pub use get_user_by_id::GetUserByIdUseCase;
pub use update_user::{UpdateUserInput, UpdateUserUseCase};
