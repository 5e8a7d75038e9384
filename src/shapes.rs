//! Built-in sample paths.

pub struct Shape {
    pub name: &'static str,
    pub description: &'static str,
    pub data: &'static str,
}

pub const SHAPES: &[Shape] = &[
    Shape {
        name: "squiggle",
        description: "Open cubic curve",
        data: "M100,100 C150,100,150,250,200,200",
    },
    Shape {
        name: "heart",
        description: "Closed heart made of arcs and quadratics",
        data: "M 10,30 A 20,20 0,0,1 50,30 A 20,20 0,0,1 90,30 Q 90,60 50,90 Q 10,60 10,30 z",
    },
    Shape {
        name: "rect",
        description: "Closed 100x100 square",
        data: "M100,100 h100 v100 h-100 z",
    },
];

pub fn find(name: &str) -> Option<&'static Shape> {
    SHAPES.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wave_core::{ArcLengthPath, PathMeasure};

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find("Heart").map(|s| s.name), Some("heart"));
        assert!(find("circle").is_none());
    }

    #[test]
    fn test_all_shapes_parse_with_length() {
        for shape in SHAPES {
            let measure = PathMeasure::from_svg(shape.data).expect(shape.name);
            assert!(measure.total_length() > 0.0, "{} has no length", shape.name);
        }
    }
}
