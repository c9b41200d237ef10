use crate::models::requests::{SearchFilters, SearchRequest};
use serde_json::{json, Value};

/// Text fields the free-text query is matched against.
pub const QUERY_FIELDS: [&str; 3] = ["content", "meta.title", "meta.author"];

/// Builds the engine request body for a search: one required multi-match
/// clause for the free text, one phrase-prefix clause per populated
/// filter, combined conjunctively, plus pagination offsets and a request
/// for exact total hit counts. Pure and deterministic.
pub fn build_search_body(request: &SearchRequest) -> Value {
    let mut must = vec![json!({
        "multi_match": {
            "query": request.query,
            "fields": QUERY_FIELDS,
        }
    })];
    must.extend(filter_clauses(&request.filters));

    let from = (request.page.saturating_sub(1) as u64) * request.size as u64;

    json!({
        "query": {
            "bool": {
                "must": must,
            }
        },
        "from": from,
        "size": request.size,
        "track_total_hits": true,
    })
}

fn filter_clauses(filters: &SearchFilters) -> Vec<Value> {
    let fields = [
        ("meta.title", &filters.title),
        ("meta.author", &filters.author),
        ("meta.language", &filters.language),
        ("owner", &filters.owner),
        ("group", &filters.group),
    ];

    fields
        .into_iter()
        .filter_map(|(field, value)| match value {
            Some(prefix) if !prefix.is_empty() => Some(json!({
                "match_phrase_prefix": {
                    field: prefix,
                }
            })),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(query: &str, page: u32, size: u32, filters: SearchFilters) -> SearchRequest {
        SearchRequest {
            query: query.to_string(),
            page,
            size,
            filters,
        }
    }

    fn must_clauses(body: &Value) -> &Vec<Value> {
        body["query"]["bool"]["must"].as_array().unwrap()
    }

    #[test]
    fn first_page_has_zero_offset() {
        let body = build_search_body(&request("report", 1, 25, SearchFilters::default()));

        assert_eq!(body["from"], 0);
        assert_eq!(body["size"], 25);
    }

    #[test]
    fn offset_is_page_minus_one_times_size() {
        let body = build_search_body(&request("report", 3, 10, SearchFilters::default()));

        assert_eq!(body["from"], 20);
        assert_eq!(body["size"], 10);
    }

    #[test]
    fn exact_total_hits_requested() {
        let body = build_search_body(&request("report", 1, 25, SearchFilters::default()));

        assert_eq!(body["track_total_hits"], true);
    }

    #[test]
    fn no_filters_yields_single_multi_match_clause() {
        let body = build_search_body(&request("report", 1, 25, SearchFilters::default()));
        let must = must_clauses(&body);

        assert_eq!(must.len(), 1);
        assert_eq!(must[0]["multi_match"]["query"], "report");
        assert_eq!(
            must[0]["multi_match"]["fields"],
            json!(["content", "meta.title", "meta.author"])
        );
    }

    #[test]
    fn author_filter_adds_phrase_prefix_on_author_field() {
        let filters = SearchFilters {
            author: Some("Jane".to_string()),
            ..Default::default()
        };
        let body = build_search_body(&request("report", 3, 10, filters));
        let must = must_clauses(&body);

        assert_eq!(body["from"], 20);
        assert_eq!(body["size"], 10);
        assert_eq!(must.len(), 2);
        assert_eq!(must[1]["match_phrase_prefix"]["meta.author"], "Jane");
    }

    #[test]
    fn each_populated_filter_adds_one_clause() {
        let filters = SearchFilters {
            title: Some("annual".to_string()),
            author: Some("Jane".to_string()),
            language: Some("en".to_string()),
            owner: Some("alice".to_string()),
            group: Some("finance".to_string()),
        };
        let body = build_search_body(&request("report", 1, 25, filters));
        let must = must_clauses(&body);

        assert_eq!(must.len(), 6);
        assert_eq!(must[1]["match_phrase_prefix"]["meta.title"], "annual");
        assert_eq!(must[2]["match_phrase_prefix"]["meta.author"], "Jane");
        assert_eq!(must[3]["match_phrase_prefix"]["meta.language"], "en");
        assert_eq!(must[4]["match_phrase_prefix"]["owner"], "alice");
        assert_eq!(must[5]["match_phrase_prefix"]["group"], "finance");
    }

    #[test]
    fn empty_filter_values_add_no_clause() {
        let filters = SearchFilters {
            author: Some(String::new()),
            language: Some(String::new()),
            ..Default::default()
        };
        let body = build_search_body(&request("report", 1, 25, filters));

        assert_eq!(must_clauses(&body).len(), 1);
    }

    #[test]
    fn construction_is_deterministic() {
        let filters = SearchFilters {
            author: Some("Jane".to_string()),
            group: Some("finance".to_string()),
            ..Default::default()
        };
        let req = request("quarterly report", 2, 50, filters);

        assert_eq!(build_search_body(&req), build_search_body(&req));
    }

    #[test]
    fn empty_query_still_builds_a_body() {
        // Engine-dependent behavior; this layer does not reject it.
        let body = build_search_body(&request("", 1, 25, SearchFilters::default()));

        assert_eq!(must_clauses(&body)[0]["multi_match"]["query"], "");
    }
}
