use chronicle_timeline::{Error, ErrorKind, Timeline};

#[derive(Debug, Clone, PartialEq)]
struct Piece {
    at_ms: i64,
    shape: char,
}

fn pieces() -> Vec<Piece> {
    "IOTSZJL"
        .chars()
        .zip([0_i64, 480, 700, 1300, 2900, 3010, 5000])
        .map(|(shape, at_ms)| Piece { at_ms, shape })
        .collect()
}

#[test]
fn permutations_build_identical_timelines() {
    let reference = Timeline::new(pieces(), |p| p.at_ms).expect("ordered");
    let probes: Vec<i64> = (-100..5200).step_by(37).chain(reference.times().to_vec()).collect();

    let mut inputs = Vec::new();
    let mut reversed = pieces();
    reversed.reverse();
    inputs.push(reversed);
    for shift in 1..7 {
        let mut rotated = pieces();
        rotated.rotate_left(shift);
        inputs.push(rotated);
    }
    let mut interleaved = pieces();
    interleaved.swap(0, 6);
    interleaved.swap(2, 4);
    inputs.push(interleaved);

    for input in inputs {
        let line = Timeline::new(input, |p| p.at_ms).expect("permuted");
        assert_eq!(line.count(), reference.count());
        assert_eq!(line.begin(), reference.begin());
        assert_eq!(line.end(), reference.end());
        assert_eq!(line.duration(), reference.duration());
        assert_eq!(line.times(), reference.times());
        for &t in &probes {
            assert_eq!(line.find(t), reference.find(t), "find({t})");
        }
    }
}

#[test]
fn find_is_none_before_begin_and_greatest_at_or_before_after() {
    let line = Timeline::new(pieces(), |p| p.at_ms).expect("timeline");
    assert_eq!(line.find(-1), None);
    assert_eq!(line.find(0).map(|p| p.shape), Some('I'));
    assert_eq!(line.find(699).map(|p| p.shape), Some('O'));
    assert_eq!(line.find(700).map(|p| p.shape), Some('T'));
    assert_eq!(line.find(3009).map(|p| p.shape), Some('Z'));
    assert_eq!(line.find(i64::MAX).map(|p| p.shape), Some('L'));

    for t in -50..5100 {
        let expected = line.iter().filter(|(time, _)| *time <= t).last().map(|(_, p)| p);
        assert_eq!(line.find(t), expected, "find({t})");
    }
}

#[test]
fn construction_errors_are_invalid_input() {
    let err = Timeline::new(Vec::<Piece>::new(), |p| p.at_ms).expect_err("empty");
    assert_eq!(err, Error::EmptyTimeline);
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let mut doubled = pieces();
    doubled.push(Piece {
        at_ms: 700,
        shape: 'X',
    });
    let err = Timeline::new(doubled, |p| p.at_ms).expect_err("duplicate");
    assert_eq!(err, Error::DuplicateTime { time: 700, index: 7 });
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn timeline_is_shareable_across_threads() {
    let line = Timeline::new(pieces(), |p| p.at_ms).expect("timeline");
    std::thread::scope(|scope| {
        for start in [0_i64, 1000, 3000] {
            let line = &line;
            scope.spawn(move || {
                let mut feed = line.feed_from(start);
                let mut shapes = Vec::new();
                feed.play_each(2000, |p| shapes.push(p.shape)).expect("play");
                shapes
            });
        }
    });

    let mut feed = line.feed_from(1000);
    let mut shapes = Vec::new();
    feed.play_each(2000, |p| shapes.push(p.shape)).expect("play");
    assert_eq!(shapes, vec!['S', 'Z']);
}
