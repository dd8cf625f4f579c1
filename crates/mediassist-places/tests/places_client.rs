use mediassist_places::{ClinicSearch, PlacesClient};
use mockito::Matcher;
use serde_json::json;

fn client_for(server: &mockito::Server) -> PlacesClient {
    PlacesClient::builder()
        .api_key("maps-key")
        .base_url(server.url())
        .build()
        .unwrap()
}

fn place(i: usize) -> serde_json::Value {
    json!({
        "name": format!("Clinic {}", i),
        "formatted_address": format!("{} Main Road, Lucknow", i),
        "rating": 4.5,
        "place_id": format!("place-{}", i)
    })
}

#[tokio::test]
async fn test_find_clinics_sends_query_and_key() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/textsearch/json")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "clinics or hospitals near Lucknow".into()),
            Matcher::UrlEncoded("key".into(), "maps-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"status": "OK", "results": [place(1)]}).to_string())
        .create_async()
        .await;
    
    let clinics = client_for(&server).find_clinics("Lucknow").await.unwrap();
    
    mock.assert_async().await;
    assert_eq!(clinics.len(), 1);
    assert_eq!(clinics[0].name, "Clinic 1");
    assert_eq!(clinics[0].rating, "4.5");
    assert!(clinics[0].link.contains("query_place_id=place-1"));
}

#[tokio::test]
async fn test_find_clinics_limits_to_five() {
    let mut server = mockito::Server::new_async().await;
    let results: Vec<_> = (1..=8).map(place).collect();
    server
        .mock("GET", "/textsearch/json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"status": "OK", "results": results}).to_string())
        .create_async()
        .await;
    
    let clinics = client_for(&server).find_clinics("Lucknow").await.unwrap();
    
    let names: Vec<&str> = clinics.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Clinic 1", "Clinic 2", "Clinic 3", "Clinic 4", "Clinic 5"]);
}

#[tokio::test]
async fn test_incomplete_results_inside_top_five_are_dropped() {
    let mut server = mockito::Server::new_async().await;
    let mut results: Vec<_> = (1..=6).map(place).collect();
    results[1] = json!({"name": "No address", "place_id": "x"});
    server
        .mock("GET", "/textsearch/json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"status": "OK", "results": results}).to_string())
        .create_async()
        .await;
    
    let clinics = client_for(&server).find_clinics("Lucknow").await.unwrap();
    
    assert_eq!(clinics.len(), 4);
    assert!(clinics.iter().all(|c| c.name != "Clinic 6"));
}

#[tokio::test]
async fn test_zero_results_is_empty_list() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/textsearch/json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"status": "ZERO_RESULTS", "results": []}).to_string())
        .create_async()
        .await;
    
    let clinics = client_for(&server).find_clinics("Nowhere").await.unwrap();
    assert!(clinics.is_empty());
}

#[tokio::test]
async fn test_request_denied_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/textsearch/json")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            json!({"status": "REQUEST_DENIED", "error_message": "The provided API key is invalid.", "results": []})
                .to_string(),
        )
        .create_async()
        .await;
    
    let err = client_for(&server).find_clinics("Lucknow").await.unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("REQUEST_DENIED"));
    assert!(msg.contains("API key is invalid"));
}

#[tokio::test]
async fn test_http_error_and_bad_json() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/textsearch/json")
        .match_query(Matcher::UrlEncoded("query".into(), "clinics or hospitals near broken".into()))
        .with_status(200)
        .with_body("<html>oops</html>")
        .create_async()
        .await;
    server
        .mock("GET", "/textsearch/json")
        .match_query(Matcher::UrlEncoded("query".into(), "clinics or hospitals near down".into()))
        .with_status(503)
        .create_async()
        .await;
    
    let client = client_for(&server);
    
    let err = client.find_clinics("broken").await.unwrap_err();
    assert!(err.to_string().contains("decoding JSON"));
    
    let err = client.find_clinics("down").await.unwrap_err();
    assert!(err.to_string().contains("503"));
}
