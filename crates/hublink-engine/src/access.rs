//! Delegated-access token resolution.
//!
//! A person may have granted access under their profile id or under any of
//! their mail addresses, so the token store is searched by each identifier in
//! turn until one of them has tokens on file.

use hublink_core::{hub::TaskHub, identity::Identity, token::DelegatedToken};

/// The identifiers to search the token store with, in order: the external
/// profile id, the institutional address derived from the short-code, the
/// primary address, then every other listed address. Empty entries are
/// skipped; duplicates are kept so the order stays predictable.
pub fn candidate_identifiers(identity: &Identity, institution_domain: &str) -> Vec<String> {
  let profile_id = identity.profile_id().map(str::to_string);
  let institutional = identity.institutional_email(institution_domain);
  let primary = Some(identity.email_address.clone());
  let others = identity.emails.iter().map(|e| Some(e.email.clone()));

  [profile_id, institutional, primary]
    .into_iter()
    .chain(others)
    .flatten()
    .map(|candidate| candidate.trim().to_string())
    .filter(|candidate| !candidate.is_empty())
    .collect()
}

/// Find a token that allows updating the person's profile.
///
/// The first candidate with any tokens on file decides the outcome: its first
/// token carrying the `update` scope is returned, and if none does the search
/// stops without trying further candidates. Store errors are logged and the
/// search moves on.
pub async fn resolve_delegated_token<H: TaskHub>(
  hub: &H,
  identity: &Identity,
  institution_domain: &str,
) -> Option<DelegatedToken> {
  for candidate in candidate_identifiers(identity, institution_domain) {
    let tokens = match hub.tokens(&candidate).await {
      Ok(tokens) => tokens,
      Err(e) => {
        tracing::warn!(%candidate, error = %e, "token lookup failed");
        continue;
      }
    };
    if tokens.is_empty() {
      continue;
    }

    let token = tokens.into_iter().find(DelegatedToken::can_update);
    if token.is_none() {
      tracing::info!(%candidate, "tokens on file lack the update scope");
    }
    return token;
  }

  tracing::debug!(identity_id = identity.id, "no delegated token on file");
  None
}

#[cfg(test)]
mod tests {
  use std::{collections::HashMap, sync::atomic::Ordering};

  use super::*;
  use crate::fakes::{FakeHub, identity, token, with_email, with_profile_id};

  const DOMAIN: &str = "example.edu";

  fn person() -> Identity {
    let identity = with_profile_id(identity(484378182, "rpaw058"), "0000-0003-1255-9023");
    with_email(identity, "r.paw@personal.example.com")
  }

  #[test]
  fn candidates_are_ordered_and_skip_blanks() {
    let mut identity = person();
    identity.emails.insert(0, hublink_core::identity::IdentityEmail::default());

    assert_eq!(candidate_identifiers(&identity, DOMAIN), vec![
      "0000-0003-1255-9023".to_string(),
      "rpaw058@example.edu".to_string(),
      "rpaw058@mail.example.edu".to_string(),
      "r.paw@personal.example.com".to_string(),
    ]);
  }

  #[tokio::test]
  async fn third_candidate_wins_after_exactly_three_lookups() {
    let hub = FakeHub {
      tokens: HashMap::from([(
        "rpaw058@mail.example.edu".to_string(),
        vec![token("0000-0003-1255-9023", "rpaw058@mail.example.edu", "/read-limited /activities/update")],
      )]),
      ..FakeHub::default()
    };

    let found = resolve_delegated_token(&hub, &person(), DOMAIN).await.unwrap();
    assert_eq!(found.email, "rpaw058@mail.example.edu");
    assert_eq!(hub.token_calls.load(Ordering::SeqCst), 3);
  }

  #[tokio::test]
  async fn first_nonempty_list_without_update_scope_stops_the_search() {
    let hub = FakeHub {
      tokens: HashMap::from([
        ("0000-0003-1255-9023".to_string(), vec![token("0000-0003-1255-9023", "", "/read-limited")]),
        ("rpaw058@example.edu".to_string(), vec![token("0000-0003-1255-9023", "", "/activities/update")]),
      ]),
      ..FakeHub::default()
    };

    assert!(resolve_delegated_token(&hub, &person(), DOMAIN).await.is_none());
    assert_eq!(hub.token_queries(), vec!["0000-0003-1255-9023".to_string()]);
  }

  #[tokio::test]
  async fn store_errors_do_not_stop_the_search() {
    let hub = FakeHub {
      failing_token: ["0000-0003-1255-9023".to_string()].into(),
      tokens: HashMap::from([(
        "rpaw058@example.edu".to_string(),
        vec![
          token("0000-0003-1255-9023", "rpaw058@example.edu", "/read-limited"),
          token("0000-0003-1255-9023", "rpaw058@example.edu", "/activities/update"),
        ],
      )]),
      ..FakeHub::default()
    };

    let found = resolve_delegated_token(&hub, &person(), DOMAIN).await.unwrap();
    assert_eq!(found.scopes, "/activities/update");
    assert_eq!(hub.token_calls.load(Ordering::SeqCst), 2);
  }

  #[tokio::test]
  async fn no_tokens_anywhere() {
    let hub = FakeHub::default();
    assert!(resolve_delegated_token(&hub, &person(), DOMAIN).await.is_none());
    assert_eq!(hub.token_calls.load(Ordering::SeqCst), 4);
  }
}
