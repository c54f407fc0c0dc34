use golf_card::model::{
    HoleCount, Par, RoundConfig, RoundState, ScoreDisplay, Summary, format_to_par, hole_rows,
    totals,
};

fn record(round: &mut RoundState, player: usize, strokes: &[u32]) {
    for (hole, &s) in strokes.iter().enumerate() {
        round.set_stroke(player, hole, s).unwrap();
    }
}

#[test]
fn two_player_six_hole_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let config = RoundConfig::new(2, vec!["A".into(), "B".into()], HoleCount::Six)?;
    let mut round = config.start_round()?;
    record(&mut round, 0, &[4, 5, 3, 4, 4, 5]);
    record(&mut round, 1, &[5, 5, 4, 3, 4, 4]);

    let t = totals(&round);
    assert_eq!(t.total_par, 18);
    assert_eq!(t.total_strokes, vec![25, 25]);
    assert_eq!(t.to_par, vec![7, 7]);
    Ok(())
}

#[test]
fn hole_rows_follow_hole_order() -> Result<(), Box<dyn std::error::Error>> {
    let config = RoundConfig::new(2, vec![], HoleCount::Six)?;
    let mut round = config.start_round()?;
    round.set_par(1, 4)?;
    round.set_stroke(1, 1, 3)?;

    let rows = hole_rows(&round);
    assert_eq!(rows.len(), 6);
    assert_eq!(
        rows.iter().map(|r| r.hole_number).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5, 6]
    );
    assert_eq!(rows[1].par, Par::Four);
    assert_eq!(rows[1].strokes, vec![1, 3]);
    assert_eq!(
        rows[1].score_display,
        vec![ScoreDisplay::Albatross, ScoreDisplay::Birdie]
    );
    Ok(())
}

#[test]
fn totals_track_every_mutation() -> Result<(), Box<dyn std::error::Error>> {
    let config = RoundConfig::new(3, vec![], HoleCount::Nine)?;
    let mut round = config.start_round()?;

    let steps: [(usize, usize, i8); 12] = [
        (0, 0, 1),
        (0, 0, 1),
        (1, 4, 1),
        (2, 8, -1),
        (2, 8, 1),
        (2, 8, 1),
        (0, 0, -1),
        (1, 4, -1),
        (1, 4, -1),
        (0, 3, 1),
        (2, 2, 1),
        (2, 2, -1),
    ];
    for (i, &(player, hole, delta)) in steps.iter().enumerate() {
        if delta > 0 {
            round.increment_stroke(player, hole)?;
        } else {
            round.decrement_stroke(player, hole)?;
        }
        round.set_par(i % 9, [3, 4, 5][i % 3])?;

        let t = totals(&round);
        let par_sum: u32 = round.pars().iter().map(|p| p.strokes()).sum();
        assert_eq!(t.total_par, par_sum);
        for player in 0..3 {
            let row_sum: u32 = round.row(player)?.iter().sum();
            assert_eq!(t.total_strokes[player], row_sum);
        }
    }
    Ok(())
}

#[test]
fn summary_is_recomputed_from_live_cells() -> Result<(), Box<dyn std::error::Error>> {
    let config = RoundConfig::new(1, vec!["Solo".into()], HoleCount::Six)?;
    let mut round = config.start_round()?;
    let before = Summary::from_round(&round);
    assert_eq!(before.totals.total_strokes, vec![6]);

    round.set_stroke_from_text(0, 2, "5")?;
    round.set_par(5, 5)?;
    let after = Summary::from_round(&round);
    assert_eq!(after.player_names, vec!["Solo"]);
    assert_eq!(after.totals.total_strokes, vec![10]);
    assert_eq!(after.totals.total_par, 20);
    assert_eq!(before.totals.total_par, 18);
    Ok(())
}

#[test]
fn score_display_covers_the_range() {
    assert_eq!(ScoreDisplay::for_hole(1, Par::Five), ScoreDisplay::Condor);
    assert_eq!(ScoreDisplay::for_hole(2, Par::Five), ScoreDisplay::Albatross);
    assert_eq!(ScoreDisplay::for_hole(2, Par::Four), ScoreDisplay::Eagle);
    assert_eq!(ScoreDisplay::for_hole(3, Par::Three), ScoreDisplay::Par);
    assert_eq!(ScoreDisplay::for_hole(4, Par::Three), ScoreDisplay::Bogey);
    assert_eq!(ScoreDisplay::for_hole(6, Par::Three), ScoreDisplay::TripleBogey);
    assert_eq!(ScoreDisplay::for_hole(9, Par::Three), ScoreDisplay::Worse);
}

#[test]
fn to_par_formatting() {
    assert_eq!(format_to_par(0), "E");
    assert_eq!(format_to_par(3), "+3");
    assert_eq!(format_to_par(-2), "-2");
}
