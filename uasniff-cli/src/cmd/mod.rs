pub mod check;
pub mod classify;
