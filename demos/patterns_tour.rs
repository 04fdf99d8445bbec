use skelly::{Executor, Stage};

fn main() -> Result<(), skelly::SkellyError> {
    let exec = Executor::new(4)?;
    println!("Running every pattern on {} workers\n", exec.workers());

    // Example 1: Map and reduce
    let src = vec![1, 2, 3, 4, 5];
    println!("Source: {:?}", src);

    let mut squares = vec![0; src.len()];
    exec.map(&mut squares, &src, |x| x * x);
    println!("Squares: {:?}", squares);

    let total = exec.reduce(&squares, 0, |a, b| a + b);
    println!("Sum of squares: {}", total);

    // Example 2: Running totals with both scans
    let mut inclusive = vec![0; src.len()];
    exec.inclusive_scan(&mut inclusive, &src, |a, b| a + b);
    println!("\nInclusive scan: {:?}", inclusive);

    let mut exclusive = vec![0; src.len()];
    exec.exclusive_scan(&mut exclusive, &src, 0, |a, b| a + b);
    println!("Exclusive scan: {:?}", exclusive);

    // Example 3: Pack the even elements, then gather them back-to-front
    let values = vec![10, 25, 30, 45, 50, 65, 70];
    let keep: Vec<bool> = values.iter().map(|v| v % 2 == 0).collect();
    let mut packed = vec![0; values.len()];
    let kept = skelly::pack(&mut packed, &values, &keep);
    println!("\nEven values: {:?}", &packed[..kept]);

    let filter: Vec<usize> = (0..kept).rev().collect();
    let mut reversed = vec![0; kept];
    exec.gather(&mut reversed, &packed[..kept], &filter)?;
    println!("Reversed via gather: {:?}", reversed);

    // Example 4: Scatter into a permuted layout
    let perm = [3, 0, 2, 1];
    let letters = ['a', 'b', 'c', 'd'];
    let mut shuffled = ['_'; 4];
    exec.scatter(&mut shuffled, &letters, &perm);
    println!("\nScatter {:?} through {:?} -> {:?}", letters, perm, shuffled);

    // Example 5: The same stage chain on all three pipeline executors
    let stages: [Stage<'_, i32>; 2] = [&|x| x + 1, &|x| x * 2];
    let input = [1, 2, 3];

    let mut by_stage = [0; 3];
    exec.map_pipeline(&mut by_stage, &input, &stages);
    let mut by_item = [0; 3];
    exec.item_pipeline(&mut by_item, &input, &stages);
    let mut by_wave = [0; 3];
    exec.staged_pipeline(&mut by_wave, &input, &stages);
    println!("\nPipeline (+1 then *2) over {:?}:", input);
    println!("  map_pipeline:    {:?}", by_stage);
    println!("  item_pipeline:   {:?}", by_item);
    println!("  staged_pipeline: {:?}", by_wave);

    // Example 6: Farm on an uneven workload, timed against map
    let size = 100_000;
    let workload: Vec<u64> = (0..size).map(|i| (i * 2_654_435_761) % 1_000_000 + 1).collect();

    let start = std::time::Instant::now();
    let mut mapped = vec![0u64; workload.len()];
    exec.map(&mut mapped, &workload, collatz_steps);
    let map_time = start.elapsed();

    let start = std::time::Instant::now();
    let mut farmed = vec![0u64; workload.len()];
    exec.farm(&mut farmed, &workload, collatz_steps);
    let farm_time = start.elapsed();

    assert_eq!(mapped, farmed);
    println!("\nCollatz steps for {} uneven elements:", size);
    println!("  map:  {:?}", map_time);
    println!("  farm: {:?}", farm_time);

    Ok(())
}

fn collatz_steps(start: &u64) -> u64 {
    let mut n = *start;
    let mut steps = 0;
    while n > 1 {
        n = if n % 2 == 0 { n / 2 } else { 3 * n + 1 };
        steps += 1;
    }
    steps
}
