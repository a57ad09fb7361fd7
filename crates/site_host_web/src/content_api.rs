//! `fetch()`-backed content API client.

use content_model::{
    Achievement, ContentApi, ContentError, ContentFuture, ExperienceEntry, MyLife, PersonalInfo,
    Project, TravelTrip, WebProfile,
};
use serde::de::DeserializeOwned;

/// Default mount point of the content API.
pub const DEFAULT_CONTENT_API_BASE: &str = "/api";

/// Content API client issuing browser `fetch()` requests against a base URL.
#[derive(Debug, Clone)]
pub struct WebContentApi {
    base_url: String,
}

impl Default for WebContentApi {
    fn default() -> Self {
        Self::new(DEFAULT_CONTENT_API_BASE)
    }
}

impl WebContentApi {
    /// Creates a client for `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ContentError> {
        let url = self.endpoint(path);

        #[cfg(target_arch = "wasm32")]
        {
            fetch_json(&url).await
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = url;
            Err(ContentError::Unavailable(
                "browser fetch requires a wasm32 target".to_string(),
            ))
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, ContentError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let window =
        web_sys::window().ok_or_else(|| ContentError::Unavailable("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ContentError::Unavailable(format!("bad request: {e:?}")))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| ContentError::Unavailable(format!("headers: {e:?}")))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ContentError::Unavailable(format!("fetch failed: {e:?}")))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ContentError::Unavailable("fetch returned a non-response".to_string()))?;

    match response.status() {
        404 => return Err(ContentError::NotFound),
        status if !response.ok() => return Err(ContentError::Http { status }),
        _ => {}
    }

    let body = JsFuture::from(
        response
            .text()
            .map_err(|e| ContentError::Decode(format!("{e:?}")))?,
    )
    .await
    .map_err(|e| ContentError::Decode(format!("{e:?}")))?;
    let body = body
        .as_string()
        .ok_or_else(|| ContentError::Decode("response body is not text".to_string()))?;

    serde_json::from_str(&body).map_err(|e| ContentError::Decode(e.to_string()))
}

impl ContentApi for WebContentApi {
    fn projects(&self) -> ContentFuture<'_, Vec<Project>> {
        Box::pin(self.get_json("/projects"))
    }

    fn project_by_slug<'a>(&'a self, slug: &'a str) -> ContentFuture<'a, Project> {
        Box::pin(async move { self.get_json(&format!("/projects/slug/{slug}")).await })
    }

    fn trips(&self) -> ContentFuture<'_, Vec<TravelTrip>> {
        Box::pin(self.get_json("/travel"))
    }

    fn trip_by_slug<'a>(&'a self, slug: &'a str) -> ContentFuture<'a, TravelTrip> {
        Box::pin(async move { self.get_json(&format!("/travel/slug/{slug}")).await })
    }

    fn personal_info(&self) -> ContentFuture<'_, PersonalInfo> {
        Box::pin(self.get_json("/personal-info"))
    }

    fn experience(&self) -> ContentFuture<'_, Vec<ExperienceEntry>> {
        Box::pin(self.get_json("/experience"))
    }

    fn achievements(&self) -> ContentFuture<'_, Vec<Achievement>> {
        Box::pin(self.get_json("/achievements"))
    }

    fn my_life(&self) -> ContentFuture<'_, MyLife> {
        Box::pin(self.get_json("/mylife"))
    }

    fn web_profile(&self) -> ContentFuture<'_, WebProfile> {
        Box::pin(self.get_json("/webprofile"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let api = WebContentApi::default();
        assert_eq!(api.endpoint("/projects"), "/api/projects");

        let custom = WebContentApi::new("https://content.example/api/");
        assert_eq!(
            custom.endpoint("/travel/slug/kyoto"),
            "https://content.example/api/travel/slug/kyoto"
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_target_reports_unavailable() {
        let api = WebContentApi::default();
        let result = futures::executor::block_on(api.personal_info());
        assert!(matches!(result, Err(ContentError::Unavailable(_))));
    }
}
