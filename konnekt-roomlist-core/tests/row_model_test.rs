use konnekt_roomlist_core::{
    build_rows, compare_column, decorate_member_count, format_member_tooltip, sort_rows, Color,
    Column, Decoration, GameInfo, HostInfo, IconTheme, LobbyRowModel, Member, Pixmap, Room,
    RoomSnapshot, RowFilter, SortOrder,
};
use std::cmp::Ordering;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_test_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("debug"))
        .with(fmt::layer().with_test_writer())
        .try_init();
}

fn room(name: &str, game: &str, host: &str, members: &[&str], max_players: u32) -> Room {
    Room::new(
        name.to_string(),
        GameInfo {
            title_id: 0,
            name: game.to_string(),
            icon: None,
        },
        HostInfo {
            username: host.to_string(),
            ip: "192.168.0.10".to_string(),
            port: 24872,
            verify_uid: String::new(),
        },
        max_players,
    )
    .with_members(
        members
            .iter()
            .map(|nickname| Member::anonymous(nickname.to_string()))
            .collect(),
    )
}

fn lobby() -> Vec<Room> {
    vec![
        room("Races", "Mario Kart", "bob", &["bob", "amy", "cid"], 4),
        room("Speedrun", "zelda", "Dana", &["Dana"], 2),
        room("Chill", "", "eve", &[], 8),
        room("Party", "animal Crossing", "Al", &["Al", "x", "y", "z", "w"], 4),
        room("Lonely", "", "fred", &["fred"], 0),
    ]
}

/// Theme that draws every named icon as a white square
struct WhiteTheme;

impl IconTheme for WhiteTheme {
    fn icon(&self, _name: &str, size: u32) -> Option<Pixmap> {
        Some(Pixmap::filled(size, size, [255, 255, 255, 255]))
    }
}

#[test]
fn test_zero_capacity_never_near_full() {
    for count in 0..16 {
        assert_ne!(decorate_member_count(count, 0), Some(Color::NEAR_FULL));
    }
}

#[test]
fn test_empty_room_color_for_any_capacity() {
    for max_players in [1, 2, 3, 8, 64, u32::MAX] {
        assert_eq!(decorate_member_count(0, max_players), Some(Color::EMPTY));
    }
}

#[test]
fn test_tooltip_examples() {
    assert_eq!(format_member_tooltip(&[]), "");
    assert_eq!(
        format_member_tooltip(&[Member::new(
            String::new(),
            "Bob".to_string(),
            0,
            String::new()
        )]),
        "Bob is not playing a game"
    );
    assert_eq!(
        format_member_tooltip(&[Member::new(
            "Alster".to_string(),
            "Al".to_string(),
            0,
            "Zelda".to_string()
        )]),
        "Al (Alster) is playing Zelda"
    );
}

#[test]
fn test_member_count_comparison() {
    let rows = build_rows(&[
        room("A", "Kart", "a", &["1", "2", "3", "4", "5"], 8),
        room("B", "Zelda", "b", &["1", "2", "3"], 8),
        room("C", "Tetris", "c", &["1", "2", "3"], 3),
    ]);

    assert_eq!(
        compare_column(Column::MemberCount, &rows[0], &rows[1]),
        Ordering::Greater
    );
    assert_eq!(
        compare_column(Column::MemberCount, &rows[1], &rows[2]),
        Ordering::Equal
    );
}

#[test]
fn test_build_rows_is_idempotent() {
    let rooms = lobby();

    assert_eq!(build_rows(&rooms), build_rows(&rooms));
}

#[test]
fn test_sort_by_game_name_with_empty_names_is_stable() {
    let mut rows = build_rows(&lobby());

    sort_rows(&mut rows, Column::GameName, SortOrder::Ascending);

    let rooms: Vec<_> = rows
        .iter()
        .map(|row| row.cell(Column::RoomName).display())
        .collect();
    assert_eq!(rooms, ["Chill", "Lonely", "Party", "Races", "Speedrun"]);
}

#[test]
fn test_sort_every_column_both_directions() {
    let rows = build_rows(&lobby());

    for column in Column::ALL {
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let mut sorted = rows.clone();
            sort_rows(&mut sorted, column, order);

            assert_eq!(sorted.len(), rows.len());
            for pair in sorted.windows(2) {
                let ordering = compare_column(column, &pair[0], &pair[1]);
                match order {
                    SortOrder::Ascending => assert_ne!(ordering, Ordering::Greater),
                    SortOrder::Descending => assert_ne!(ordering, Ordering::Less),
                }
            }
        }
    }
}

#[test]
fn test_member_count_decorations_across_lobby() {
    let rows = build_rows(&lobby());
    let colors: Vec<_> = rows
        .iter()
        .map(|row| match row.cell(Column::MemberCount).decoration() {
            Some(Decoration::Foreground(color)) => Some(*color),
            _ => None,
        })
        .collect();

    assert_eq!(
        colors,
        [
            Some(Color::NEAR_FULL),
            Some(Color::NEAR_FULL),
            Some(Color::EMPTY),
            Some(Color::FULL),
            Some(Color::FULL),
        ]
    );
}

#[test]
fn test_model_refresh_cycle() {
    init_test_tracing();

    let mut model = LobbyRowModel::with_theme(Box::new(WhiteTheme));
    model.sort(Column::Host, SortOrder::Ascending);
    model.refresh(&lobby());

    let hosts: Vec<_> = model
        .visible_rows()
        .map(|row| row.cell(Column::Host).display().to_string())
        .collect();
    assert_eq!(hosts, ["Al", "bob", "Dana", "eve", "fred"]);

    model.set_filter(RowFilter::default().hiding_full(true).hiding_empty(true));
    let visible: Vec<_> = model
        .visible_rows()
        .map(|row| row.cell(Column::RoomName).display().to_string())
        .collect();
    assert_eq!(visible, ["Races", "Speedrun"]);

    // Next refresh drops a room; sort and filter survive
    let mut next = lobby();
    next.remove(0);
    model.refresh(&next);

    assert_eq!(model.row_count(), 4);
    let visible: Vec<_> = model
        .visible_rows()
        .map(|row| row.cell(Column::RoomName).display().to_string())
        .collect();
    assert_eq!(visible, ["Speedrun"]);
}

#[test]
fn test_themed_placeholder_icon() {
    let mut model = LobbyRowModel::with_theme(Box::new(WhiteTheme));
    model.refresh(&lobby());

    match model.rows()[0].cell(Column::GameName).decoration() {
        Some(Decoration::Icon(icon)) => {
            assert_eq!((icon.width(), icon.height()), (32, 32));
            assert_eq!(icon.pixel(0, 0), Some([255, 255, 255, 255]));
        }
        other => panic!("expected icon decoration, got {:?}", other),
    }
}

#[test]
fn test_snapshot_to_rows() {
    let json = r#"{
        "rooms": [
            {
                "name": "Locked",
                "description": "friends only",
                "game": { "title_id": 16, "name": "Kart" },
                "host": { "username": "amy", "ip": "10.1.1.1", "port": 24872, "verify_uid": "v1" },
                "members": [
                    { "username": "amy_acc", "nickname": "amy", "title_id": 16, "game_name": "Kart" }
                ],
                "max_players": 2,
                "has_password": true
            }
        ]
    }"#;

    let snapshot: RoomSnapshot = serde_json::from_str(json).unwrap();
    let rows = build_rows(&snapshot.rooms);

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.cell(Column::MemberCount).display(), "1 / 2 ");
    assert_eq!(
        row.cell(Column::RoomDescription).display(),
        "Description: friends only"
    );
    assert!(row.cell(Column::RoomName).decoration().is_some());
    assert_eq!(row.member_tooltip(), "amy (amy_acc) is playing Kart");
    assert_eq!(row.endpoint().verify_uid, "v1");
}

#[test]
fn test_oversized_snapshot_icon_falls_back_to_blank_square() {
    let json = r#"{
        "rooms": [
            {
                "name": "Broken icon",
                "game": {
                    "name": "Kart",
                    "icon": { "width": 2147483648, "height": 2147483648, "pixels": [] }
                },
                "max_players": 4
            }
        ]
    }"#;

    let snapshot: RoomSnapshot = serde_json::from_str(json).unwrap();
    let rows = build_rows(&snapshot.rooms);

    match rows[0].cell(Column::GameName).decoration() {
        Some(Decoration::Icon(icon)) => {
            assert_eq!((icon.width(), icon.height()), (32, 32));
            assert_eq!(icon.pixel(0, 0), Some([0, 0, 0, 255]));
        }
        other => panic!("expected icon decoration, got {:?}", other),
    }
}
