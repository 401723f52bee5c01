mod utils;

mod check;
mod classify;
mod help;
