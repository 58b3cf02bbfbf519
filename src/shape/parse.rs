use std::str::{FromStr, SplitWhitespace};

use nalgebra::{Point2, Point3, Vector3};

use super::{Shape, ShapeError, Tag};

/// Cursor over the arguments of one line.
struct Args<'src> {
    line: usize,
    words: SplitWhitespace<'src>,
}

impl<'src> Args<'src> {
    fn word(&mut self, what: &'static str) -> Result<&'src str, ShapeError> {
        self.words.next().ok_or(ShapeError::Missing {
            line: self.line,
            what,
        })
    }

    fn float(&mut self, what: &'static str) -> Result<f32, ShapeError> {
        let line = self.line;
        f32::from_str(self.word(what)?).map_err(|source| ShapeError::Float { line, source })
    }

    fn int<I: FromStr<Err = std::num::ParseIntError>>(
        &mut self,
        what: &'static str,
    ) -> Result<I, ShapeError> {
        let line = self.line;
        I::from_str(self.word(what)?).map_err(|source| ShapeError::Int { line, source })
    }

    fn int_str<I: FromStr<Err = std::num::ParseIntError>>(&self, s: &str) -> Result<I, ShapeError> {
        I::from_str(s).map_err(|source| ShapeError::Int {
            line: self.line,
            source,
        })
    }
}

pub(super) fn parse(src: &str) -> Result<Shape, ShapeError> {
    let mut shape = Shape::default();
    for (i, raw) in src.lines().enumerate() {
        let content = match raw.split_once('#') {
            Some((before, _)) => before,
            None => raw,
        };
        let mut args = Args {
            line: i + 1,
            words: content.split_whitespace(),
        };
        let directive = match args.words.next() {
            Some(d) => d,
            None => continue,
        };
        match directive {
            "v" => {
                let p = Point3::new(args.float("x")?, args.float("y")?, args.float("z")?);
                shape.positions.push(p);
            }
            "vt" => {
                let uv = Point2::new(args.float("u")?, args.float("v")?);
                shape.uvs.push(uv);
            }
            "vn" => {
                let n = Vector3::new(args.float("x")?, args.float("y")?, args.float("z")?);
                shape.normals.push(n);
            }
            "f" => face(&mut shape, &mut args)?,
            "t" => shape.tags.push(tag(&mut args)?),
            _ => {
                return Err(ShapeError::UnknownDirective {
                    line: args.line,
                    directive: directive.to_owned(),
                })
            }
        }
    }
    Ok(shape)
}

fn face(shape: &mut Shape, args: &mut Args<'_>) -> Result<(), ShapeError> {
    let start = shape.face_indices.len();
    let num_positions = shape.positions.len() as i64;
    while let Some(vert) = args.words.next() {
        // only the position reference matters: `p`, `p/t`, `p//n`, `p/t/n`
        let position = vert.split('/').next().unwrap_or(vert);
        let index: i64 = args.int_str(position)?;
        let resolved = match index {
            0 => return Err(ShapeError::ZeroIndex { line: args.line }),
            i if i > 0 => i - 1,
            i => {
                let r = num_positions + i;
                if r < 0 {
                    return Err(ShapeError::RelativeIndex {
                        line: args.line,
                        index: i,
                    });
                }
                r
            }
        };
        let resolved = u32::try_from(resolved).map_err(|_| ShapeError::RelativeIndex {
            line: args.line,
            index,
        })?;
        shape.face_indices.push(resolved);
    }
    let size = shape.face_indices.len() - start;
    if size == 0 {
        return Err(ShapeError::Missing {
            line: args.line,
            what: "face vertices",
        });
    }
    shape.face_sizes.push(size as u32);
    Ok(())
}

fn tag(args: &mut Args<'_>) -> Result<Tag, ShapeError> {
    let name = args.word("tag name")?.to_owned();
    let counts = args.word("argument counts")?;
    let mut counts = counts.split('/');
    let mut count = |what| -> Result<usize, ShapeError> {
        let c = counts.next().ok_or(ShapeError::Missing {
            line: args.line,
            what,
        })?;
        args.int_str(c)
    };
    let (ni, nf, ns) = (
        count("integer count")?,
        count("float count")?,
        count("string count")?,
    );

    let mut tag = Tag {
        name,
        ..Default::default()
    };
    for _ in 0..ni {
        tag.ints.push(args.int("integer argument")?);
    }
    for _ in 0..nf {
        tag.floats.push(args.float("float argument")?);
    }
    for _ in 0..ns {
        tag.strings.push(args.word("string argument")?.to_owned());
    }
    Ok(tag)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn directives() {
        let shape = parse(
            "# a triangle\n\
             v 0 0 0\n\
             v 1 0 0\n\
             v 0 1 0 # trailing\n\
             vt 0.5 0.5\n\
             vn 0 0 1\n\
             \n\
             f 1/1/1 -2//1 3\n\
             t crease 0/1/1 2.5 sharp\n",
        )
        .unwrap();
        assert_eq!(shape.positions.len(), 3);
        assert_eq!(shape.uvs, vec![Point2::new(0.5, 0.5)]);
        assert_eq!(shape.normals, vec![Vector3::new(0.0, 0.0, 1.0)]);
        assert_eq!(shape.face_sizes, vec![3]);
        assert_eq!(shape.face_indices, vec![0, 1, 2]);
        assert_eq!(
            shape.tag("crease"),
            Some(&Tag {
                name: "crease".into(),
                ints: vec![],
                floats: vec![2.5],
                strings: vec!["sharp".into()],
            })
        );
    }

    #[test]
    fn errors() {
        assert!(matches!(
            parse("v 0 0 0\nq 1\n"),
            Err(ShapeError::UnknownDirective { line: 2, .. })
        ));
        assert!(matches!(
            parse("v 0 0\n"),
            Err(ShapeError::Missing { line: 1, what: "z" })
        ));
        assert!(matches!(
            parse("v 0 zero 0\n"),
            Err(ShapeError::Float { line: 1, .. })
        ));
        assert!(matches!(
            parse("v 0 0 0\nf 0 1 1\n"),
            Err(ShapeError::ZeroIndex { line: 2 })
        ));
        assert!(matches!(
            parse("v 0 0 0\nf -2 1 1\n"),
            Err(ShapeError::RelativeIndex { line: 2, index: -2 })
        ));
        assert!(matches!(
            parse("t name 1/0/0\n"),
            Err(ShapeError::Missing { line: 1, what: "integer argument" })
        ));
        assert!(matches!(
            parse("t name 1/0\n"),
            Err(ShapeError::Missing { line: 1, what: "string count" })
        ));
    }
}
