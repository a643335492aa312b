use crate::HttpStatusCode;

/// **VALUE**: Verifies the 2xx boundary used by every submit handler.
///
/// **WHY THIS MATTERS**: Handlers navigate or confirm only on success. A wrong boundary
/// would redirect a user after a rejected login.
///
/// **BUG THIS CATCHES**: Would catch off-by-one errors at 199/200 and 299/300.
#[test]
fn given_status_codes_around_2xx_when_checking_success_then_only_2xx_accepted() {
    assert!(!HttpStatusCode(199).is_success());
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(204).is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode(300).is_success());
    assert!(!HttpStatusCode(302).is_success());
    assert!(!HttpStatusCode(401).is_success());
}

/// **VALUE**: Verifies client/server error categorisation.
///
/// **WHY THIS MATTERS**: Log messages distinguish a rejected form from a broken server.
///
/// **BUG THIS CATCHES**: Would catch overlapping or swapped ranges.
#[test]
fn given_error_codes_when_categorised_then_client_and_server_ranges_are_disjoint() {
    let bad_request = HttpStatusCode::from(400);
    let internal = HttpStatusCode::from(500);

    assert!(bad_request.is_client_error());
    assert!(!bad_request.is_server_error());
    assert!(internal.is_server_error());
    assert!(!internal.is_client_error());
    assert_eq!(internal.to_string(), "500");
    assert_eq!(internal.as_u16(), 500);
}
