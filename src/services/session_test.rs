use super::*;

// =============================================================================
// bytes_to_hex / generate_token
// =============================================================================

#[test]
fn bytes_to_hex_pads_and_concatenates() {
    assert_eq!(bytes_to_hex(&[]), "");
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0x00]), "dead00");
}

#[test]
fn token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn tokens_are_unique_per_call() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// live database flows
// =============================================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;
    use crate::services::user::register;
    use crate::state::test_helpers;

    async fn seeded_user(pool: &sqlx::PgPool) -> UserView {
        let username = format!("sess_{}", &generate_token()[..16]);
        register(pool, &username, "secret").await.unwrap().data.unwrap()
    }

    #[tokio::test]
    async fn create_validate_delete_round_trip() {
        let pool = test_helpers::live_pool().await;
        let user = seeded_user(&pool).await;

        let token = create_session(&pool, user.id).await.unwrap();
        let found = validate_session(&pool, &token).await.unwrap();
        assert_eq!(found, Some(user));

        delete_session(&pool, &token).await.unwrap();
        assert_eq!(validate_session(&pool, &token).await.unwrap(), None);
    }

    #[tokio::test]
    async fn unknown_token_reads_as_logged_out() {
        let pool = test_helpers::live_pool().await;
        assert_eq!(validate_session(&pool, &generate_token()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn deleting_unknown_token_is_a_noop() {
        let pool = test_helpers::live_pool().await;
        delete_session(&pool, &generate_token()).await.unwrap();
        delete_session(&pool, &generate_token()).await.unwrap();
    }
}
