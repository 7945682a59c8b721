// Property tests for the drag/drop coordinator under arbitrary event streams

mod fixtures;

use chrono::{Duration, NaiveDate, Timelike};
use proptest::prelude::*;

use task_calendar::models::calendar_block::BlockId;
use task_calendar::models::task::TaskId;
use task_calendar::scheduling::{
    GridEvent, GridMetrics, Intent, InteractionState, MenuAction, MenuAnchor, ScheduleSnapshot,
};

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (3u32..=7).prop_map(|day| NaiveDate::from_ymd_opt(2024, 6, day).unwrap())
}

fn task_strategy() -> impl Strategy<Value = TaskId> {
    prop_oneof![Just("t1"), Just("t2"), Just("ghost")].prop_map(TaskId::new)
}

fn block_strategy() -> impl Strategy<Value = Option<BlockId>> {
    prop_oneof![Just(None), Just(Some("b1")), Just(Some("gone"))]
        .prop_map(|id| id.map(BlockId::new))
}

fn event_strategy() -> impl Strategy<Value = GridEvent> {
    prop_oneof![
        (task_strategy(), block_strategy())
            .prop_map(|(task_id, block_id)| GridEvent::DragBegin { task_id, block_id }),
        (date_strategy(), -100.0f32..1700.0)
            .prop_map(|(date, offset_px)| GridEvent::DragOver { date, offset_px }),
        Just(GridEvent::DragLeave),
        proptest::option::of(date_strategy()).prop_map(|target| GridEvent::Drop { target }),
        Just(GridEvent::DragCancel),
        (task_strategy(), block_strategy()).prop_map(|(task_id, block_id)| {
            GridEvent::OpenContextMenu {
                anchor: MenuAnchor::new(10.0, 10.0),
                task_id,
                block_id,
            }
        }),
        Just(GridEvent::CloseContextMenu),
        Just(GridEvent::MenuAction(MenuAction::RemoveFromCalendar)),
        date_strategy().prop_map(GridEvent::SelectDate),
        task_strategy().prop_map(GridEvent::TaskClick),
    ]
}

proptest! {
    #[test]
    fn drops_and_cancels_always_end_the_drag(events in prop::collection::vec(event_strategy(), 0..40)) {
        let tasks = fixtures::tasks::all();
        let blocks = vec![fixtures::monday_block()];
        let snapshot = ScheduleSnapshot::new(&tasks, &blocks);
        let metrics = GridMetrics::default();
        let mut state = InteractionState::default();

        for event in events {
            let ends_drag = matches!(event, GridEvent::Drop { .. } | GridEvent::DragCancel);
            let was_dragging = state.dragging().is_some();
            let intents = state.update(event, &snapshot, &metrics);

            if ends_drag {
                prop_assert!(state.dragging().is_none());
            }
            if ends_drag && was_dragging {
                prop_assert_eq!(intents.last(), Some(&Intent::DragStart(None)));
            }
        }
    }

    #[test]
    fn dropped_blocks_start_on_the_snap_grid(events in prop::collection::vec(event_strategy(), 0..40)) {
        let tasks = fixtures::tasks::all();
        let blocks = vec![fixtures::monday_block()];
        let snapshot = ScheduleSnapshot::new(&tasks, &blocks);
        let metrics = GridMetrics::default();
        let mut state = InteractionState::default();

        for event in events {
            for intent in state.update(event, &snapshot, &metrics) {
                match intent {
                    Intent::CreateBlock { task_id, start, end } => {
                        let task = snapshot.task(&task_id).unwrap();
                        prop_assert_eq!(start.minute() % 15, 0);
                        prop_assert_eq!(end - start, Duration::minutes(i64::from(task.expected_time)));
                    }
                    Intent::UpdateBlock { block_id, start, end } => {
                        prop_assert_eq!(block_id, BlockId::new("b1"));
                        prop_assert_eq!(start.minute() % 15, 0);
                        // Length follows whichever task was carried by the drag
                        let length = end - start;
                        prop_assert!(length == Duration::minutes(30) || length == Duration::minutes(60));
                    }
                    Intent::DeleteBlock(block_id) => {
                        prop_assert!(block_id.as_str() == "b1" || block_id.as_str() == "gone");
                    }
                    _ => {}
                }
            }
        }
    }
}
