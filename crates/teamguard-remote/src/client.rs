use crate::api::MembershipApi;
use crate::error::RemoteError;
use crate::page;
use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder, Response};
use std::time::Duration;
use teamguard_types::{Account, ids};

pub const DEFAULT_API_URL: &str = "https://api.heroku.com";

const HEROKU_ACCEPT: &str = "application/vnd.heroku+json; version=3";
const NEXT_RANGE: &str = "Next-Range";
const INITIAL_BACKOFF: Duration = Duration::from_millis(250);

/// Explicit client configuration, constructed once at process start.
///
/// The client never reads ambient environment state; token and target are
/// supplied by the caller.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub token: String,
    /// Team name or enterprise-account identifier.
    pub target: String,
    /// Selects the enterprise-accounts endpoint family.
    pub enterprise: bool,
    pub api_url: String,
    pub timeout: Duration,
    /// Retry ceiling for transient failures (including the first attempt).
    pub max_attempts: u32,
}

impl ClientConfig {
    pub fn new(token: impl Into<String>, target: impl Into<String>, enterprise: bool) -> Self {
        Self {
            token: token.into(),
            target: target.into(),
            enterprise,
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_attempts: 3,
        }
    }

    pub fn scope(&self) -> &'static str {
        if self.enterprise {
            ids::SCOPE_ENTERPRISE
        } else {
            ids::SCOPE_TEAM
        }
    }
}

/// Blocking Heroku Platform API client.
pub struct HerokuClient {
    http: Client,
    cfg: ClientConfig,
}

impl HerokuClient {
    pub fn new(cfg: ClientConfig) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(cfg.timeout).build()?;
        Ok(Self { http, cfg })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.cfg
    }

    fn members_url(&self) -> String {
        members_url(&self.cfg.api_url, &self.cfg.target, self.cfg.enterprise)
    }

    fn member_url(&self, identifier: &str) -> String {
        format!("{}/{}", self.members_url(), identifier)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .header(reqwest::header::ACCEPT, HEROKU_ACCEPT)
            .bearer_auth(&self.cfg.token)
    }

    /// Send a request, retrying connect/timeout errors, 429s, and 5xx with
    /// doubling backoff up to the configured attempt ceiling. Anything else
    /// is returned to the caller for status-specific handling.
    fn send_with_retry(
        &self,
        method: Method,
        url: &str,
        range: Option<&str>,
    ) -> Result<Response, RemoteError> {
        let mut backoff = INITIAL_BACKOFF;
        let mut attempt = 0u32;
        loop {
            attempt += 1;
            let mut req = self.request(method.clone(), url);
            if let Some(r) = range {
                req = req.header(reqwest::header::RANGE, r);
            }

            let retry_reason = match req.send() {
                Ok(resp) => {
                    let status = resp.status();
                    if status.as_u16() == 429 || status.is_server_error() {
                        format!("HTTP {}", status.as_u16())
                    } else {
                        return Ok(resp);
                    }
                }
                Err(err) => err.to_string(),
            };

            if attempt >= self.cfg.max_attempts.max(1) {
                return Err(RemoteError::Transient {
                    attempts: attempt,
                    reason: retry_reason,
                });
            }
            std::thread::sleep(backoff);
            backoff *= 2;
        }
    }
}

impl MembershipApi for HerokuClient {
    fn fetch_roster(&self) -> Result<Vec<Account>, RemoteError> {
        let url = self.members_url();
        let mut pages = Vec::new();
        let mut next_range: Option<String> = None;

        loop {
            let resp = self.send_with_retry(Method::GET, &url, next_range.as_deref())?;
            let status = resp.status().as_u16();
            if !matches!(status, 200 | 206) {
                return Err(roster_error_for_status(
                    status,
                    read_body(resp),
                    self.cfg.scope(),
                    &self.cfg.target,
                ));
            }

            let partial = status == 206;
            next_range = resp
                .headers()
                .get(NEXT_RANGE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);

            let body: serde_json::Value = resp
                .json()
                .map_err(|e| RemoteError::Payload(format!("roster page: {e}")))?;
            let parsed = if self.cfg.enterprise {
                page::parse_enterprise_page(&body)?
            } else {
                page::parse_team_page(&body)?
            };
            pages.push(parsed);

            if !partial || next_range.is_none() {
                break;
            }
        }

        page::merge_pages(pages)
    }

    fn find_account(&self, email: &str) -> Result<Option<Account>, RemoteError> {
        // The enterprise-accounts API has no by-email member endpoint;
        // degrade to a roster scan there.
        if self.cfg.enterprise {
            let roster = self.fetch_roster()?;
            return Ok(roster
                .into_iter()
                .find(|a| a.email.eq_ignore_ascii_case(email)));
        }

        let url = self.member_url(email);
        let resp = self.send_with_retry(Method::GET, &url, None)?;
        match resp.status().as_u16() {
            200 => {
                let body: serde_json::Value = resp
                    .json()
                    .map_err(|e| RemoteError::Payload(format!("member lookup: {e}")))?;
                Ok(Some(page::parse_team_member(&body)?))
            }
            404 => Ok(None),
            401 | 403 => Err(RemoteError::Auth {
                status: resp.status().as_u16(),
            }),
            status => Err(RemoteError::Api {
                status,
                body: read_body(resp),
            }),
        }
    }

    fn revoke_membership(&self, account: &Account) -> Result<(), RemoteError> {
        // Teams address members by email; enterprise accounts by member id.
        let identifier = if self.cfg.enterprise {
            account.id.as_deref().ok_or_else(|| RemoteError::NotFound {
                email: account.email.clone(),
            })?
        } else {
            account.email.as_str()
        };

        let url = self.member_url(identifier);
        let resp = self.send_with_retry(Method::DELETE, &url, None)?;
        match resp.status().as_u16() {
            200 | 202 | 204 => Ok(()),
            404 => Err(RemoteError::NotFound {
                email: account.email.clone(),
            }),
            401 | 403 => Err(RemoteError::Auth {
                status: resp.status().as_u16(),
            }),
            status => Err(RemoteError::Api {
                status,
                body: read_body(resp),
            }),
        }
    }
}

fn members_url(api_url: &str, target: &str, enterprise: bool) -> String {
    let family = if enterprise {
        "enterprise-accounts"
    } else {
        "teams"
    };
    format!("{}/{}/{}/members", api_url.trim_end_matches('/'), family, target)
}

/// Map a non-2xx status on the roster *collection* endpoint.
///
/// A 404 here is not a missing member, it is a missing roster: the scope
/// flag disagrees with the identifier, which is a configuration error.
fn roster_error_for_status(status: u16, body: String, scope: &str, target: &str) -> RemoteError {
    match status {
        401 | 403 => RemoteError::Auth { status },
        404 | 422 => RemoteError::Config(format!(
            "no {scope} roster found for '{target}': check whether --enterprise matches the identifier"
        )),
        _ => RemoteError::Api { status, body },
    }
}

fn read_body(resp: Response) -> String {
    resp.text().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_family_follows_the_scope_flag() {
        assert_eq!(
            members_url(DEFAULT_API_URL, "acme", false),
            "https://api.heroku.com/teams/acme/members"
        );
        assert_eq!(
            members_url(DEFAULT_API_URL, "acme-ent", true),
            "https://api.heroku.com/enterprise-accounts/acme-ent/members"
        );
        // Trailing slash on an override must not double up.
        assert_eq!(
            members_url("http://127.0.0.1:8080/", "t", false),
            "http://127.0.0.1:8080/teams/t/members"
        );
    }

    #[test]
    fn roster_404_is_a_configuration_error_not_a_missing_member() {
        let err = roster_error_for_status(404, String::new(), "team", "acme");
        match err {
            RemoteError::Config(msg) => {
                assert!(msg.contains("--enterprise"));
                assert!(msg.contains("acme"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn roster_auth_statuses_map_to_auth() {
        assert!(matches!(
            roster_error_for_status(401, String::new(), "team", "t"),
            RemoteError::Auth { status: 401 }
        ));
        assert!(matches!(
            roster_error_for_status(403, String::new(), "team", "t"),
            RemoteError::Auth { status: 403 }
        ));
    }

    #[test]
    fn unexpected_roster_status_is_surfaced_with_body() {
        let err = roster_error_for_status(410, "gone".to_string(), "team", "t");
        match err {
            RemoteError::Api { status, body } => {
                assert_eq!(status, 410);
                assert_eq!(body, "gone");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn scope_string_follows_flag() {
        assert_eq!(ClientConfig::new("t", "x", false).scope(), "team");
        assert_eq!(ClientConfig::new("t", "x", true).scope(), "enterprise");
    }
}
