/// Panics with the parser's diagnostics when `document` is not a
/// syntactically valid GraphQL executable document.
pub(crate) fn assert_valid_graphql(document: &str) {
    if let Err(err) = graphql_parser::parse_query::<String>(document) {
        panic!("Generated document failed to parse: {err}\n\n{document}");
    }
}

pub(crate) fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
}
