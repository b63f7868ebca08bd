//! Render methods for each wizard step

mod confirm;
mod review;
mod setup;
