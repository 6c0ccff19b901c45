//! Backend payload parsing

use cifra_core::{CifraError, Page, Potpourri, Song};

#[test]
fn song_list_page_parses() {
    let json = r#"{
        "musicas": [
            {"id": 1, "nome": "Asa Branca", "artista": "Luiz Gonzaga", "link_musica": "https://example.com/1"},
            {"id": 2, "nome": "Xote das Meninas", "artista": "Luiz Gonzaga", "link_musica": "https://example.com/2", "velocidade_rolamento": 1.5}
        ],
        "pagination": {"page": 1, "pages": 3, "per_page": 2, "total": 6, "has_next": true, "has_prev": false}
    }"#;

    let page: Page<Song> = serde_json::from_str(json).unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].sheet, None);
    assert_eq!(page.items[0].scroll_speed(), 1.0);
    assert_eq!(page.items[1].scroll_speed(), 1.5);
    assert_eq!(page.next_page(), Some(2));
    assert_eq!(page.previous_page(), None);
}

#[test]
fn song_list_page_tolerates_null_columns() {
    let json = r#"{
        "musicas": [
            {"id": 7, "nome": null, "artista": "Dominguinhos", "link_musica": "https://example.com/7"},
            {"id": 8, "nome": "Eu Só Quero um Xodó", "artista": null, "link_musica": "https://example.com/8"}
        ],
        "pagination": {"page": 1, "pages": 1, "per_page": 10, "total": 2, "has_next": false, "has_prev": false}
    }"#;

    let page: Page<Song> = serde_json::from_str(json).unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].name, "");
    assert_eq!(page.items[0].artist, "Dominguinhos");
    assert_eq!(page.items[1].artist, "");
}

#[test]
fn potpourri_list_page_parses() {
    let json = r#"{
        "potpourri": [{"id": 4, "nome_potpourri": "São João"}],
        "pagination": {"page": 2, "pages": 2, "per_page": 10, "total": 11, "has_next": false, "has_prev": true}
    }"#;

    let page: Page<Potpourri> = serde_json::from_str(json).unwrap();

    assert_eq!(page.items[0].name, "São João");
    assert!(page.items[0].entries.is_empty());
    assert_eq!(page.next_page(), None);
    assert_eq!(page.previous_page(), Some(1));
}

#[test]
fn potpourri_detail_embeds_songs() {
    let json = r#"{
        "id": 4,
        "nome_potpourri": "São João",
        "musicas_potpourri": [
            {"musica_id": 2, "ordem_tocagem": 2, "musica": {"id": 2, "nome": "Xote", "artista": "Trio", "link_musica": "x", "cifra": "Am G"}},
            {"musica_id": 1, "ordem_tocagem": 1}
        ]
    }"#;

    let potpourri = Potpourri::from_json(json).unwrap();
    let order: Vec<_> = potpourri
        .ordered_entries()
        .iter()
        .map(|entry| entry.song_id)
        .collect();

    assert_eq!(order, vec![1, 2]);
    assert_eq!(
        potpourri.entries[0].song.as_ref().map(Song::sheet_text),
        Some("Am G")
    );
    assert!(potpourri.validate().is_ok());
}

#[test]
fn song_round_trips_with_backend_names() {
    let song = Song::new(9, "Baião", "Luiz Gonzaga", "https://example.com/9")
        .with_sheet("C G")
        .with_scroll_speed(2.0);

    let json = serde_json::to_value(&song).unwrap();
    assert_eq!(json["nome"], "Baião");
    assert_eq!(json["cifra"], "C G");
    assert_eq!(json["velocidade_rolamento"], 2.0);

    let back: Song = serde_json::from_value(json).unwrap();
    assert_eq!(back, song);
}

#[test]
fn malformed_payload_is_a_serialization_error() {
    let err = Song::from_json(r#"{"id": "not a number"}"#).unwrap_err();
    assert!(matches!(err, CifraError::Serialization(_)));
}
