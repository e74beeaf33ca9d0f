// Helper macro to bootstrap an e2e server in tests. Defined here so child test
// modules can use it directly. It expands to a `let` binding that awaits
// `crate::tests::e2e::util::spawn_test_server()` and yields
// `(bind_addr, server_handle)`.
macro_rules! with_e2e_server {
    ($addr:ident, $handle:ident) => {
        let ($addr, $handle) = crate::tests::e2e::util::spawn_test_server().await;
    };
}

mod util;
