// Integration tests for kuliner
use actix_web::http::StatusCode;
use actix_web::test::{call_and_read_body_json, call_service, init_service, TestRequest};
use actix_web::{web, App};
use kuliner_api::{MenuApi, RecommendApi};
use kuliner_core::{
    normalize, ItemIndex, KulinerRecord, MenuCatalog, MenuMatch, SimilarityMatrix, TfidfMatrix,
    TfidfVectorizer, MATCH_THRESHOLD,
};
use kuliner_storage::{ArtifactLoader, ArtifactSet, Availability};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};
use std::path::Path;

const DISHES: [(&str, &[&str]); 8] = [
    ("Pempek Kapal Selam", &["ikan", "sagu", "telur", "cuko"]),
    ("Pempek Lenjer", &["ikan", "sagu", "cuko"]),
    ("Pempek Adaan", &["ikan", "sagu", "bawang", "cuko"]),
    ("Tekwan", &["ikan", "sagu", "kuah", "udang"]),
    ("Model", &["ikan", "sagu", "kuah", "tahu"]),
    ("Pindang Patin", &["ikan", "patin", "kuah", "nanas"]),
    ("Laksan", &["ikan", "sagu", "santan"]),
    ("Es Kacang Merah", &["kacang", "susu", "es"]),
];

/// Builds a small but realistic artifact set: binary term weights per dish
/// and the cosine similarity between every pair of them.
fn artifact_set() -> ArtifactSet {
    let mut vocabulary: Vec<&str> = DISHES.iter().flat_map(|(_, terms)| terms.iter().copied()).collect();
    vocabulary.sort_unstable();
    vocabulary.dedup();

    let column = |term: &str| vocabulary.iter().position(|t| *t == term).unwrap();

    let rows: Vec<Vec<(usize, f32)>> = DISHES
        .iter()
        .map(|(_, terms)| {
            let weight = 1.0 / (terms.len() as f32).sqrt();
            let mut row: Vec<(usize, f32)> = terms.iter().map(|t| (column(*t), weight)).collect();
            row.sort_by_key(|&(c, _)| c);
            row
        })
        .collect();

    let dense: Vec<Vec<f32>> = rows
        .iter()
        .map(|row| {
            let mut v = vec![0.0f32; vocabulary.len()];
            for &(c, w) in row {
                v[c] = w;
            }
            v
        })
        .collect();

    let similarity: Vec<Vec<f32>> = dense
        .iter()
        .map(|a| {
            dense
                .iter()
                .map(|b| a.iter().zip(b).map(|(x, y)| x * y).sum::<f32>())
                .collect::<Vec<f32>>()
        })
        .collect();

    ArtifactSet {
        vectorizer: TfidfVectorizer {
            vocabulary: vocabulary.iter().enumerate().map(|(i, t)| (t.to_string(), i)).collect(),
            idf: vec![1.0; vocabulary.len()],
        },
        tfidf: TfidfMatrix::from_rows(vocabulary.len(), &rows),
        similarity: SimilarityMatrix::from_rows(similarity).unwrap(),
        records: DISHES
            .iter()
            .map(|(name, terms)| KulinerRecord::new(*name).with_attribute("Bahan", json!(terms.join(", "))))
            .collect(),
        index: ItemIndex::from_names(DISHES.iter().map(|(name, _)| *name)),
    }
}

fn load_from(dir: &Path) -> Availability {
    ArtifactLoader::new(dir).load_availability().unwrap()
}

#[test]
fn test_recommendations_never_include_query() {
    let dir = tempfile::tempdir().unwrap();
    artifact_set().save(dir.path()).unwrap();
    let availability = load_from(dir.path());
    let catalog = availability.catalog().unwrap();

    for (name, _) in DISHES {
        let recs = catalog.recommend(name, DISHES.len()).unwrap();
        assert_eq!(recs.len(), DISHES.len() - 1);
        assert!(recs.iter().all(|r| r.nama_kuliner != name), "{name} recommended itself");
    }
}

#[test]
fn test_recommendation_scores_non_increasing() {
    let dir = tempfile::tempdir().unwrap();
    artifact_set().save(dir.path()).unwrap();
    let availability = load_from(dir.path());
    let catalog = availability.catalog().unwrap();

    for (name, _) in DISHES {
        let recs = catalog.recommend(name, 10).unwrap();
        for pair in recs.windows(2) {
            assert!(pair[0].similarity_score >= pair[1].similarity_score);
        }
    }
}

#[test]
fn test_exactly_n_when_catalog_is_larger() {
    let catalog = artifact_set().into_catalog().unwrap();
    for n in 1..DISHES.len() {
        assert_eq!(catalog.recommend("Tekwan", n).unwrap().len(), n);
    }
    assert_eq!(catalog.recommend("Tekwan", 50).unwrap().len(), DISHES.len() - 1);
}

#[test]
fn test_closest_dish_is_the_sibling() {
    let catalog = artifact_set().into_catalog().unwrap();
    let recs = catalog.recommend("Tekwan", 1).unwrap();
    assert_eq!(recs[0].nama_kuliner, "Model");

    let recs = catalog.recommend("Es Kacang Merah", 3).unwrap();
    assert!(recs.iter().all(|r| r.similarity_score == 0.0));
    // Equal scores fall back to catalog order.
    assert_eq!(recs[0].nama_kuliner, "Pempek Kapal Selam");
    assert_eq!(recs[1].nama_kuliner, "Pempek Lenjer");
}

#[actix_web::test]
async fn test_recommend_endpoint_with_loaded_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    artifact_set().save(dir.path()).unwrap();

    let app = init_service(
        App::new()
            .app_data(web::Data::new(load_from(dir.path())))
            .configure(RecommendApi::routes),
    )
    .await;

    let req = TestRequest::post()
        .uri("/recommend")
        .set_json(json!({"kuliner": "Pempek Lenjer", "num_recommendations": 3}))
        .to_request();
    let body: Value = call_and_read_body_json(&app, req).await;
    assert_eq!(body["kuliner_input"], "Pempek Lenjer");
    let recs = body["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 3);
    assert!(recs.iter().all(|r| r["nama_kuliner"] != "Pempek Lenjer"));

    let req = TestRequest::post()
        .uri("/recommend")
        .set_json(json!({"kuliner": "Nonexistent Dish"}))
        .to_request();
    let resp = call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_absent_artifacts_answer_503() {
    let dir = tempfile::tempdir().unwrap();
    let availability = load_from(&dir.path().join("models"));
    assert!(!availability.is_ready());

    let app = init_service(
        App::new()
            .app_data(web::Data::new(availability))
            .configure(RecommendApi::routes),
    )
    .await;

    let resp = call_service(&app, TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    for kuliner in ["Tekwan", "Nonexistent Dish"] {
        let req = TestRequest::post()
            .uri("/recommend")
            .set_json(json!({"kuliner": kuliner}))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}

#[test]
fn test_normalize_idempotent_on_random_input() {
    const ALPHABET: &[char] = &[
        'a', 'Z', 'q', '0', '9', ' ', ' ', '\t', '\n', '-', '!', '.', 'é', 'Ö', 'ß', 'İ', '_', '7',
    ];
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let len = rng.random_range(0..40);
        let input: String = (0..len)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
            .collect();
        let once = normalize(&input);
        assert_eq!(normalize(&once), once, "input: {input:?}");
        assert!(!once.starts_with(' ') && !once.ends_with(' '));
        assert!(!once.contains("  "));
    }
}

#[test]
fn test_exact_match_beats_fuzzy() {
    let menu = MenuCatalog::default();
    assert_eq!(
        menu.resolve("pempek adaan"),
        MenuMatch::Found { menu: "Pempek Adaan".to_string() }
    );
    match menu.resolve("pempek kapl selam") {
        MenuMatch::Suggested { menu, score } => {
            assert_eq!(menu, "Pempek Kapal Selam");
            assert!(score >= MATCH_THRESHOLD);
        }
        other => panic!("expected suggestion, got {:?}", other),
    }
    assert_eq!(menu.resolve("nasi goreng"), MenuMatch::NotFound);
}

#[actix_web::test]
async fn test_menu_endpoint_end_to_end() {
    let app = init_service(
        App::new()
            .app_data(web::Data::new(MenuCatalog::default()))
            .configure(MenuApi::routes),
    )
    .await;

    let cases = [
        ("Pempek%20Adaan", json!({"menu_found": "Pempek Adaan"})),
        ("PEMPEK-KULIT", json!({"menu_not_found": "PEMPEK-KULIT", "suggested_menu": "Pempek Kulit", "similarity_score": 96})),
        (
            "nasi%20goreng",
            json!({
                "error": "Menu 'nasi goreng' tidak ditemukan dalam dataset",
                "note": "Coba periksa penulisan menu atau gunakan nama lain",
            }),
        ),
    ];

    for (query, expected) in cases {
        let req = TestRequest::get()
            .uri(&format!("/recommend?menu_name={}", query))
            .to_request();
        let body: Value = call_and_read_body_json(&app, req).await;
        assert_eq!(body, expected, "query {query}");
    }
}
