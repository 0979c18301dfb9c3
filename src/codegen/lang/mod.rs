//! Per-target renderers. Each one is a zero-sized marker implementing
//! [`Lang`](super::Lang).

mod cpp;
mod csharp;
mod go;
mod lua;
mod python;
mod ruby;
mod rust;

pub use cpp::Cpp;
pub use csharp::CSharp;
pub use go::Go;
pub use lua::Lua;
pub use python::Python;
pub use ruby::Ruby;
pub use rust::Rust;
