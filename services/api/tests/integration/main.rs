
mod account_test;
mod auth_gate_test;
mod token_test;
