//! Celebration Use Cases

mod create_celebration;
mod delete_celebration;
mod get_celebration_by_id;
mod get_celebrations_by_user;
mod update_celebration;

pub use create_celebration::CreateCelebrationUseCase;
pub use delete_celebration::DeleteCelebrationUseCase;
pub use get_celebration_by_id::GetCelebrationByIdUseCase;
pub use get_celebrations_by_user::GetCelebrationsByUserUseCase;
pub use update_celebration::UpdateCelebrationUseCase;
