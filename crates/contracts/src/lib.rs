//! Types and pure logic shared by the frontend and the backend.

pub mod domain;
pub mod shared;
