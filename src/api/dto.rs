//! Wire shapes of the photo API

use crate::api::ApiError;
use crate::models::RemoteItem;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
struct RemoteItemDto {
    id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    color: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    description: String,
    likes: u32,
    urls: UrlsDto,
}

#[derive(Debug, Deserialize)]
struct UrlsDto {
    regular: String,
}

impl From<RemoteItemDto> for RemoteItem {
    fn from(dto: RemoteItemDto) -> Self {
        Self {
            id: dto.id,
            color_label: dto.color,
            description_label: dto.description,
            like_count: dto.likes,
            image_url: dto.urls.regular,
        }
    }
}

/// Search responses come either as a bare list or wrapped in `results`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SearchBodyDto {
    List(Vec<RemoteItemDto>),
    Envelope { results: Vec<RemoteItemDto> },
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode the body of a photo listing response.
pub fn parse_item_list(body: &[u8]) -> Result<Vec<RemoteItem>, ApiError> {
    let items: Vec<RemoteItemDto> = serde_json::from_slice(body)?;
    Ok(items.into_iter().map(RemoteItem::from).collect())
}

/// Decode the body of a photo search response.
pub fn parse_search_results(body: &[u8]) -> Result<Vec<RemoteItem>, ApiError> {
    let items = match serde_json::from_slice::<SearchBodyDto>(body) {
        Ok(SearchBodyDto::List(items)) | Ok(SearchBodyDto::Envelope { results: items }) => items,
        // The untagged error hides the field-level cause; re-run as a plain list for it.
        Err(_) => serde_json::from_slice::<Vec<RemoteItemDto>>(body)?,
    };
    Ok(items.into_iter().map(RemoteItem::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ITEMS: &str = r#"[
        {"id":"1","color":"Red","description":"Acme","likes":10,"urls":{"regular":"u1","thumb":"t1"}},
        {"id":"2","color":"Blue","description":"Acme","likes":5,"urls":{"regular":"u2"},"width":640}
    ]"#;

    #[test]
    fn parse_item_list_should_map_wire_fields() {
        let items = parse_item_list(TWO_ITEMS.as_bytes()).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0],
            RemoteItem {
                id: "1".to_string(),
                color_label: "Red".to_string(),
                description_label: "Acme".to_string(),
                like_count: 10,
                image_url: "u1".to_string(),
            }
        );
        assert_eq!(items[1].id, "2");
        assert_eq!(items[1].like_count, 5);
    }

    #[test]
    fn parse_item_list_should_treat_null_labels_as_empty() {
        let body = r#"[{"id":"x","color":null,"description":null,"likes":0,"urls":{"regular":"u"}}]"#;
        let items = parse_item_list(body.as_bytes()).unwrap();

        assert_eq!(items[0].color_label, "");
        assert_eq!(items[0].description_label, "");
    }

    #[test]
    fn parse_item_list_should_reject_missing_required_fields() {
        let body = r#"[{"id":"x","color":"Red","description":"Acme","urls":{"regular":"u"}}]"#;
        let result = parse_item_list(body.as_bytes());

        match result {
            Err(ApiError::Decode(message)) => assert!(message.contains("likes")),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn parse_item_list_should_reject_non_array_bodies() {
        let result = parse_item_list(br#"{"errors":["nope"]}"#);
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn parse_search_results_should_accept_bare_list() {
        let items = parse_search_results(TWO_ITEMS.as_bytes()).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn parse_search_results_should_accept_results_envelope() {
        let body = format!(r#"{{"total":2,"total_pages":1,"results":{TWO_ITEMS}}}"#);
        let items = parse_search_results(body.as_bytes()).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].color_label, "Blue");
    }

    #[test]
    fn parse_search_results_should_report_decode_errors() {
        let result = parse_search_results(b"not json");
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
