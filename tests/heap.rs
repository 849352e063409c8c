use algoprep::{two_sum, two_sum_brute_force};

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

// dhat allows one live profiler per process, so both allocation checks
// share a single test.
#[test]
fn brute_force_uses_no_auxiliary_heap() {
    let nums: Vec<i32> = (0..512).collect();
    let target = 1021;

    let _profiler = dhat::Profiler::builder().testing().build();

    let pair = two_sum_brute_force(&nums, target).unwrap();
    assert_eq!((pair.first, pair.second), (510, 511));

    let stats = dhat::HeapStats::get();
    dhat::assert_eq!(stats.total_blocks, 0);

    let pair = two_sum(&nums, target).unwrap();
    assert_eq!((pair.first, pair.second), (510, 511));

    let stats = dhat::HeapStats::get();
    dhat::assert!(stats.total_blocks > 0);
}
