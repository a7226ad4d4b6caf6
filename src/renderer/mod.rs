//! Responsible for rendering templates

pub use self::renderer::Renderer;

mod call_stack;
mod renderer;

#[cfg(test)]
mod tests;
