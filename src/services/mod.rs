// webshell services
// Services are stateless or load-once helpers used at startup.

pub mod settings_engine;
