//! Event Use Cases

mod create_event;
mod delete_event;
mod get_all_events;
mod get_event_by_id;
mod update_event;

pub use create_event::CreateEventUseCase;
pub use delete_event::DeleteEventUseCase;
pub use get_all_events::GetAllEventsUseCase;
pub use get_event_by_id::GetEventByIdUseCase;
pub use update_event::UpdateEventUseCase;
