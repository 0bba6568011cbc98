mod common;

mod catalog;
mod intake;
mod routing;
