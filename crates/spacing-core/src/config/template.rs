#[path = "template_config.rs"]
mod template_config;

pub use template_config::generate_config;

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
