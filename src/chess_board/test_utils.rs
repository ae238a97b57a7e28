use super::ChessField;

pub fn assert_fields(generated: Vec<ChessField>, mut expected: Vec<&str>) {
    let mut generated_converted: Vec<_> = generated.iter().map(|f| f.as_algebraic()).collect();
    generated_converted.sort();
    expected.sort();

    assert_eq!(generated_converted, expected);
}
