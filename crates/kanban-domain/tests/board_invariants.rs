//! Long mixed sequences of store commands and drag gestures must never
//! leave the board inconsistent.

use kanban_domain::commands::{
    AddCard, AddColumn, Command, DeleteCard, DeleteColumn, MoveCard, RenameColumn, ReorderCards,
    ReorderColumns, UpdateCard,
};
use kanban_domain::{
    Board, BoardStore, CardId, CardPatch, CardPriority, ColumnId, DragCoordinator, DragEvent,
};

/// Small deterministic generator so failures replay identically.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound.max(1)
    }
}

fn pick_column(board: &Board, rng: &mut Lcg) -> ColumnId {
    let order = board.column_order();
    if order.is_empty() {
        return ColumnId::from("missing");
    }
    order[rng.next(order.len())].clone()
}

fn pick_card(board: &Board, rng: &mut Lcg) -> Option<(CardId, ColumnId, usize)> {
    let cards: Vec<_> = board.cards().keys().cloned().collect();
    if cards.is_empty() {
        return None;
    }
    let card = cards[rng.next(cards.len())].clone();
    let (column, index) = board.locate_card(&card)?;
    Some((card, column.clone(), index))
}

fn random_command(board: &Board, rng: &mut Lcg) -> Box<dyn Command> {
    match rng.next(9) {
        0 => Box::new(AddColumn::new(Some(format!("Column {}", rng.next(100))))),
        1 => Box::new(RenameColumn {
            column_id: pick_column(board, rng),
            title: "Renamed".to_string(),
        }),
        2 if rng.next(4) == 0 => Box::new(DeleteColumn {
            column_id: pick_column(board, rng),
        }),
        3 => {
            let mut order = board.column_order().to_vec();
            order.reverse();
            Box::new(ReorderColumns { order })
        }
        4 | 5 => Box::new(AddCard::new(
            pick_column(board, rng),
            CardPatch::new().title("Generated").priority(CardPriority::Low),
        )),
        6 => match pick_card(board, rng) {
            Some((card_id, column_id, _)) => Box::new(DeleteCard { card_id, column_id }),
            None => Box::new(AddColumn::new(None)),
        },
        7 => match pick_card(board, rng) {
            Some((card_id, from_column_id, _)) => Box::new(MoveCard {
                card_id,
                from_column_id,
                to_column_id: pick_column(board, rng),
                to_index: rng.next(5),
            }),
            None => Box::new(AddColumn::new(None)),
        },
        _ => {
            let column_id = pick_column(board, rng);
            let mut order = board
                .column(&column_id)
                .map(|column| column.card_ids.clone())
                .unwrap_or_default();
            let shift = usize::from(!order.is_empty());
            order.rotate_left(shift);
            Box::new(ReorderCards { column_id, order })
        }
    }
}

fn random_gesture(board: &Board, rng: &mut Lcg) -> Vec<DragEvent> {
    let Some((card_id, column_id, index)) = pick_card(board, rng) else {
        return vec![DragEvent::End];
    };
    let mut events = vec![DragEvent::CardStart {
        card_id,
        column_id: column_id.clone(),
        index,
    }];
    for _ in 0..rng.next(4) {
        let target = if rng.next(2) == 0 {
            column_id.clone()
        } else {
            pick_column(board, rng)
        };
        events.push(DragEvent::CardEnter {
            column_id: target,
            index: rng.next(4),
        });
    }
    if rng.next(3) > 0 {
        let transfer = match rng.next(3) {
            0 => None,
            1 => Some("{broken".to_string()),
            _ => Some(String::new()),
        };
        events.push(DragEvent::CardDrop {
            column_id: pick_column(board, rng),
            index: rng.next(4),
            transfer,
        });
    }
    events.push(DragEvent::End);
    events
}

#[test]
fn test_random_commands_keep_board_consistent() {
    for seed in 0..20 {
        let mut rng = Lcg(seed);
        let mut store = BoardStore::new(Board::sample());

        for _ in 0..200 {
            let command = random_command(store.board(), &mut rng);
            let before = store.board().clone();
            if store.execute(command.as_ref()).is_err() {
                assert_eq!(store.board(), &before, "failed command changed the board");
            }
            store.board().validate().unwrap();
        }
    }
}

#[test]
fn test_random_gestures_keep_board_consistent() {
    for seed in 0..20 {
        let mut rng = Lcg(seed + 1000);
        let mut store = BoardStore::new(Board::sample());
        let mut coordinator = DragCoordinator::new();

        for _ in 0..100 {
            let card_count = store.board().cards().len();
            for event in random_gesture(store.board(), &mut rng) {
                let _ = coordinator.handle(&mut store, event);
                store.board().validate().unwrap();
            }
            assert!(!coordinator.is_dragging());
            // gestures only rearrange
            assert_eq!(store.board().cards().len(), card_count);
        }
    }
}

#[test]
fn test_update_keeps_identity() {
    let mut store = BoardStore::new(Board::sample());
    let before = store.board().card(&CardId::from("c2")).unwrap().clone();

    store
        .execute(&UpdateCard {
            card_id: CardId::from("c2"),
            patch: CardPatch::new().title("Changed").assignee(""),
        })
        .unwrap();

    let after = store.board().card(&CardId::from("c2")).unwrap();
    assert_eq!(after.id, before.id);
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(after.title, "Changed");
    assert!(after.assignee.is_empty());
    assert_eq!(
        store.board().locate_card(&CardId::from("c2")),
        Some((&ColumnId::from("todo"), 1))
    );
}
