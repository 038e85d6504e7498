pub mod docpick_env;
