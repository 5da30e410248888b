// Lives in its own test binary: nothing here may initialize the global
// logger before the panic is provoked.
#[test]
#[should_panic(expected = "not initialized")]
fn logging_before_init_is_fatal() {
    fanlog::i("too early");
}
