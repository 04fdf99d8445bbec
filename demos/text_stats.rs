//! Error Handling Demonstration
//!
//! This example walks a small text-indexing flow through skelly, showing how
//! gather reports bad filter indices as values instead of panicking.

use skelly::{Executor, SkellyError};

fn main() {
    println!("🔧 Skelly Error Handling Demonstration\n");

    let exec = match Executor::new(4) {
        Ok(exec) => exec,
        Err(e) => {
            println!("Could not build an executor: {}", e);
            return;
        }
    };

    // Example 1: Word lengths and offsets for a tiny "index"
    println!("✅ Example 1: Word lengths, totals and offsets");
    let words: Vec<String> = "skeletons run the same on any worker count"
        .split_whitespace()
        .map(|w| w.to_string())
        .collect();
    println!("   Words: {:?}", words);

    let lengths: Vec<usize> = words.iter().map(|w| w.len()).collect();
    let total = exec.reduce(&lengths, 0, |a, b| a + b);
    println!("   Total characters: {}", total);

    let mut offsets = vec![0usize; lengths.len()];
    exec.exclusive_scan(&mut offsets, &lengths, 0, |a, b| a + b);
    println!("   Packed offsets: {:?}", offsets);

    // Example 2: A valid gather reorders words by an index list
    println!("\n✅ Example 2: Gather with a valid filter");
    let filter = [2usize, 0, 5];
    let mut picked = vec![String::new(); filter.len()];
    match exec.gather(&mut picked, &words, &filter) {
        Ok(()) => println!("   Picked words: {:?}", picked),
        Err(e) => println!("   Error: {}", e),
    }

    // Example 3: An out-of-range filter entry is reported, not fatal
    println!("\n❌ Example 3: Gather with a broken filter");
    let broken = [2usize, 99, 0, 41];
    let mut dest = vec![String::new(); broken.len()];
    match exec.gather(&mut dest, &words, &broken) {
        Ok(()) => println!("   Unexpected success: {:?}", dest),
        Err(SkellyError::IndexOutOfBounds {
            position,
            index,
            len,
        }) => {
            println!("   Error caught: filter[{}] = {} is outside 0..{}", position, index, len);
            println!("   Destination left untouched: {:?}", dest);
        }
        Err(e) => println!("   Unexpected error kind: {}", e),
    }

    // Example 4: Different error handling strategies
    println!("\n🔄 Example 4: Different error handling strategies");

    // Strategy 1: Fallback values when gather fails
    let mut maybe = vec![String::new(); broken.len()];
    if exec.gather(&mut maybe, &words, &broken).is_err() {
        maybe.iter_mut().for_each(|slot| *slot = "?".to_string());
    }
    println!("   Fallback result: {:?}", maybe);

    // Strategy 2: map_err for error transformation
    let mut again = vec![String::new(); broken.len()];
    let transformed = exec
        .gather(&mut again, &words, &broken)
        .map_err(|e| format!("Custom error: {}", e));
    match transformed {
        Ok(()) => println!("   Unexpected success"),
        Err(custom_msg) => println!("   {}", custom_msg),
    }

    // Strategy 3: Propagation with ?
    fn pick_and_join(exec: &Executor, words: &[String], filter: &[usize]) -> Result<String, SkellyError> {
        let mut picked = vec![String::new(); filter.len()];
        exec.gather(&mut picked, words, filter)?;
        Ok(exec.reduce(&picked, String::new(), |a, b| {
            if a.is_empty() {
                b.clone()
            } else {
                format!("{a} {b}")
            }
        }))
    }
    match pick_and_join(&exec, &words, &[3, 4, 6, 7]) {
        Ok(sentence) => println!("   Propagation success: {}", sentence),
        Err(e) => println!("   Propagation failed: {}", e),
    }
    match pick_and_join(&exec, &words, &[3, 400]) {
        Ok(sentence) => println!("   Unexpected success: {}", sentence),
        Err(e) => println!("   Propagation failed as expected: {}", e),
    }

    // Example 5: Worker count validation
    println!("\n❌ Example 5: Invalid executor configuration");
    match Executor::new(0) {
        Ok(_) => println!("   Unexpected success"),
        Err(e) => println!("   Error caught: {}", e),
    }

    println!("\n✨ Summary:");
    println!("   - Configuration and gather failures return Result<T, SkellyError>");
    println!("   - Gather reports the smallest offending filter position");
    println!("   - Failed gathers leave the destination untouched");
}
