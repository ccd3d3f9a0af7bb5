use std::fs;

use capuchin::{interpret, interpreter::value::environment::Environment};
use walkdir::WalkDir;

// Every `.mky` script under tests/programs evaluates cleanly and its final
// value's display form matches the sibling `.expected` file.
#[test]
fn example_programs_produce_their_expected_values() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "mky")
                                      })
    {
        count += 1;

        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("expected");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                           panic!("Failed to read {expected_path:?}: {e}")
                       });

        let env = Environment::new();
        let value = interpret(&source, &env).unwrap_or_else(|e| panic!("{path:?} failed: {e}"));

        assert_eq!(value.to_string(), expected.trim(), "script {path:?}");
    }

    assert!(count > 0, "No example programs found in tests/programs");
}
