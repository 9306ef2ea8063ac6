use gridsnake::{
    grid::codec,
    serializer,
    Board,
    Cause,
    Coord,
    Direction,
    GameState,
    NoFood,
    Outcome,
    Placement,
    RandomFood,
    Snake,
};

fn load(rows: &[&str]) -> GameState {
    serializer::load_str(&text(rows)).unwrap()
}

fn text(rows: &[&str]) -> String {
    rows.iter().map(|row| format!("{row}\n")).collect()
}

fn saved(state: &GameState) -> String {
    let mut out = Vec::new();
    serializer::save(state, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn default_state_is_a_walled_board_with_one_snake() {
    let state = GameState::create_default();
    let board = state.board();

    assert_eq!((board.width(), board.height()), (14, 10));
    for coord in board.coords() {
        let border = coord.x == 0
            || coord.y == 0
            || coord.x == board.width() - 1
            || coord.y == board.height() - 1;
        if border {
            assert_eq!(board.get(coord), Some(codec::WALL), "{coord}");
        }
    }

    assert_eq!(state.snakes().len(), 1);
    let snake = state.snakes()[0];
    assert!(snake.live);
    assert_eq!(snake.head, Coord::new(5, 4));
    assert_eq!(snake.facing(board), Some(Direction::Right));
    assert_eq!(state.snake_length(0), Some(2));
    assert_eq!(board.get(Coord::new(9, 2)), Some(codec::FOOD));
    assert_eq!(board.count(codec::FOOD), 1);
}

#[test]
fn single_cell_snake_facing_a_wall_dies_in_place() {
    let mut state = load(&["#####", "#  a#", "#*  #", "#####"]);
    let mut state_facing_wall = load(&["#####", "#a  #", "#*  #", "#####"]);
    let before = saved(&state_facing_wall);

    let tick = state_facing_wall.advance(&mut NoFood);

    assert_eq!(tick.outcome(0), Some(Outcome::Died(Cause::Wall)));
    assert!(!state_facing_wall.snakes()[0].live);
    assert_eq!(saved(&state_facing_wall), before);

    // the same snake with room to move survives
    state.advance(&mut NoFood);
    assert!(state.snakes()[0].live);
}

#[test]
fn curling_into_its_own_body_is_fatal() {
    let mut state = load(&["######", "#    #", "#d>v #", "# ^< #", "######"]);
    let before = saved(&state);
    assert_eq!(state.snake_length(0), Some(5));

    let tick = state.advance(&mut NoFood);

    assert_eq!(tick.outcome(0), Some(Outcome::Died(Cause::Snake)));
    assert_eq!(saved(&state), before);
    assert_eq!(state.snake_length(0), Some(5));
}

#[test]
fn chasing_its_own_tail_is_fatal() {
    // the tail would move out of the way, but the head checks first
    let mut state = load(&["####", "#dv#", "#^<#", "####"]);
    assert_eq!(state.snake_length(0), Some(4));

    let tick = state.advance(&mut NoFood);

    assert_eq!(tick.outcome(0), Some(Outcome::Died(Cause::Snake)));
}

#[test]
fn eating_keeps_the_tail_and_places_food_once() {
    let mut state = load(&["#######", "#d>*  #", "#     #", "#######"]);
    let mut calls = 0;
    let mut placer = |board: &mut Board, _: &[Snake]| {
        calls += 1;
        let at = Coord::new(5, 2);
        board.place_food(at);
        Placement::Placed(at)
    };

    let tick = state.advance(&mut placer);

    assert_eq!(calls, 1);
    assert!(matches!(tick.outcome(0), Some(Outcome::Grew { .. })));
    assert_eq!(state.snake_length(0), Some(3));
    assert_eq!(state.board().get(Coord::new(1, 1)), Some('d'));
    assert_eq!(state.snakes()[0].tail, Coord::new(1, 1));
    assert_eq!(state.board().get(Coord::new(5, 2)), Some(codec::FOOD));

    // no more food in the way: length holds steady
    let tick = state.advance(&mut NoFood);
    assert_eq!(tick.outcome(0), Some(Outcome::Moved));
    assert_eq!(state.snake_length(0), Some(3));
    assert_eq!(
        saved(&state),
        text(&["#######", "# d>> #", "#    *#", "#######"])
    );
}

#[test]
fn exhausted_food_does_not_stop_the_tick() {
    let mut state = load(&["#####", "#d* #", "#####"]);

    let tick = state.advance(&mut NoFood);

    assert_eq!(
        tick.outcome(0),
        Some(Outcome::Grew {
            food: Placement::Exhausted
        })
    );
    assert_eq!(state.board().count(codec::FOOD), 0);
    assert_eq!(state.live_count(), 1);
}

#[test]
fn snake_enters_a_cell_vacated_earlier_in_the_tick() {
    // snake 0 pulls its tail off (3,3), snake 1 moves onto it
    let mut state = load(&[
        "######",
        "#    #",
        "#  ^ #",
        "#  w<#",
        "#   w#",
        "######",
    ]);

    let tick = state.advance(&mut NoFood);

    assert_eq!(tick.outcome(0), Some(Outcome::Moved));
    assert_eq!(tick.outcome(1), Some(Outcome::Moved));
    assert_eq!(state.snakes()[1].head, Coord::new(3, 3));
}

#[test]
fn snake_cannot_enter_a_cell_vacated_later_in_the_tick() {
    // snake 0 runs into snake 1's tail before snake 1 has moved
    let mut state = load(&["######", "#s>  #", "#>w  #", "######"]);
    assert_eq!(state.snakes()[0].head, Coord::new(1, 2));
    assert_eq!(state.snakes()[1].tail, Coord::new(2, 2));

    let tick = state.advance(&mut NoFood);

    assert_eq!(tick.outcome(0), Some(Outcome::Died(Cause::Snake)));
    assert_eq!(tick.outcome(1), Some(Outcome::Moved));
    assert_eq!(saved(&state), text(&["######", "#sd> #", "#>   #", "######"]));
}

#[test]
fn boards_round_trip_through_save() {
    let boards = [
        text(&["#####", "#d> #", "#  *#", "#####"]),
        text(&["######", "#    #", "#  ^ #", "#  w<#", "#   w#", "######"]),
        text(&["   ", " s ", "   "]),
        gridsnake::DEFAULT_BOARD.to_owned(),
    ];

    for board in boards {
        let state = serializer::load_str(&board).unwrap();
        assert_eq!(saved(&state), board);
    }
}

#[test]
fn engine_output_round_trips_through_load() {
    let mut state = GameState::create_default();
    let mut food = RandomFood::seeded(3);

    for _ in 0..6 {
        state.advance(&mut food);
        let text = saved(&state);
        let reloaded = serializer::load_str(&text).unwrap();

        assert_eq!(saved(&reloaded), text);
        assert_eq!(reloaded.snakes()[0].head, state.snakes()[0].head);
        assert_eq!(reloaded.snakes()[0].tail, state.snakes()[0].tail);
    }
}

#[test]
fn collisions_between_snakes_survive_a_reload() {
    let mut state = load(&[
        "########",
        "#      #",
        "#d>>   #",
        "#    ^ #",
        "#    ^ #",
        "#    w #",
        "#      #",
        "########",
    ]);
    assert_eq!(state.snakes().len(), 2);

    let mut outcomes = Vec::new();
    for _ in 0..4 {
        let tick = state.advance(&mut NoFood);
        outcomes.push(tick.outcome(0));

        let text = saved(&state);
        let reloaded = serializer::load_str(&text).unwrap();
        assert_eq!(saved(&reloaded), text);
        assert_eq!(reloaded.snakes().len(), state.snakes().len());
    }

    // snake 0 runs into the cell snake 1 moved its head onto a tick earlier
    assert_eq!(outcomes[0], Some(Outcome::Moved));
    assert_eq!(outcomes[1], Some(Outcome::Died(Cause::Snake)));
    assert_eq!(outcomes[2], None);
    assert_eq!(state.live_count(), 0);
    assert_eq!(
        saved(&state),
        text(&[
            "########",
            "#    ^ #",
            "#  d>>^#",
            "#    w #",
            "#      #",
            "#      #",
            "#      #",
            "########",
        ])
    );
}

#[test]
fn chains_stay_intact_across_many_ticks() {
    let mut rows = vec!["#".repeat(32)];
    for y in 1..11 {
        let row = match y {
            2 | 5 | 8 => "#d>>    *    *      *          #".to_owned(),
            _ => format!("#{}#", " ".repeat(30)),
        };
        rows.push(row);
    }
    rows.push("#".repeat(32));
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();

    let mut state = load(&rows);
    let mut food = RandomFood::seeded(11);
    assert_eq!(state.snakes().len(), 3);

    for _ in 0..40 {
        let before: Vec<usize> = (0..state.snakes().len())
            .map(|id| state.snake_length(id).unwrap())
            .collect();

        let tick = state.advance(&mut food);

        for snake in state.snakes() {
            let chain = state.snake_chain(snake.id).unwrap().unwrap();
            assert_eq!(chain.first(), Some(&snake.tail));
            assert_eq!(chain.last(), Some(&snake.head));

            let expected = match tick.outcome(snake.id) {
                Some(Outcome::Grew { .. }) => before[snake.id] + 1,
                _ => before[snake.id],
            };
            assert_eq!(chain.len(), expected, "snake #{}", snake.id);
        }
    }

    assert_eq!(state.live_count(), 0);
}
