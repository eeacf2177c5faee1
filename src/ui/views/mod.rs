pub mod add;
pub mod publish;
pub mod verify;
