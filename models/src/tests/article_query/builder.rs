use crate::{ArticleQuery, ArticleQueryBuilder, ModelError, SortDirection};

/// **VALUE**: Verifies an empty builder produces the server's own defaults.
///
/// **WHY THIS MATTERS**: The paged fetch should behave exactly like the bare
/// `/articles/fetchAll` call when the user passes no options.
///
/// **BUG THIS CATCHES**: Would catch drift between `Default` and the builder.
#[test]
fn given_empty_builder_when_building_then_matches_server_defaults() {
    let query = ArticleQueryBuilder::default().build().unwrap();

    assert_eq!(query, ArticleQuery::default());
    assert_eq!(
        query.query_pairs(),
        vec![
            ("page", String::from("0")),
            ("size", String::from("10")),
            ("sort", String::from("id,asc")),
        ]
    );
}

/// **VALUE**: Verifies builder validation rejects a zero page size.
///
/// **WHY THIS MATTERS**: The server divides by page size when paging.
///
/// **BUG THIS CATCHES**: Would catch if the size check is removed.
#[test]
fn given_zero_size_when_building_then_returns_validation_error() {
    let result = ArticleQueryBuilder::default().with_size(0).build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Page size must be non-zero");
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

/// **VALUE**: Verifies `field,direction` specs parse and repeat in order.
///
/// **WHY THIS MATTERS**: Multi-key sorting relies on one `sort` param per order.
///
/// **BUG THIS CATCHES**: Would catch lost ordering or a swapped direction.
#[test]
fn given_sort_specs_when_building_then_emits_one_sort_pair_per_order() {
    let query = ArticleQueryBuilder::default()
        .with_page(2)
        .with_size(5)
        .sort_spec("publishedAt,DESC")
        .unwrap()
        .sort_spec("title")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(query.sort[0].direction, SortDirection::Desc);
    assert_eq!(
        query.query_pairs(),
        vec![
            ("page", String::from("2")),
            ("size", String::from("5")),
            ("sort", String::from("publishedAt,desc")),
            ("sort", String::from("title,asc")),
        ]
    );
}

/// **VALUE**: Verifies an unknown direction is rejected rather than guessed.
///
/// **WHY THIS MATTERS**: The server answers 500 on an unknown direction; failing early
/// gives the user a readable message.
///
/// **BUG THIS CATCHES**: Would catch a parser that silently defaults to ascending.
#[test]
fn given_unknown_direction_when_parsing_sort_spec_then_returns_error() {
    let result = ArticleQueryBuilder::default().sort_spec("id,sideways");

    assert!(matches!(result, Err(ModelError::Validation { .. })));
}

/// **VALUE**: Verifies a rejected sort spec reports the caller's position.
///
/// **WHY THIS MATTERS**: Error locations are how log readers find the failing call.
///
/// **BUG THIS CATCHES**: Would catch the location pointing into the builder or into
/// the standard library's closure plumbing.
#[test]
fn given_unknown_direction_when_parsing_sort_spec_then_location_is_call_site() {
    let (result, line) = (ArticleQueryBuilder::default().sort_spec("id,sideways"), line!());

    match result {
        Err(ModelError::Validation { location, .. }) => {
            assert!(location.file.ends_with("builder.rs"), "{}", location.file);
            assert!(location.file.contains("tests"), "{}", location.file);
            assert_eq!(location.line, line);
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }
}
