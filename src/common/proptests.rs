//! Property-based tests for normalization, resolution and relative-path computation.

use crate::{
    AbsolutePath, Dialect, Drive, Path, PathKind, UnixAbsolutePath, UnixPath, WindowsAbsolutePath,
    WindowsPath, WindowsRelativePath,
};
use proptest::prelude::*;

// Strategy for atoms, weighted towards the ones normalization cares about
fn atom_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        2 => Just(String::from(".")),
        3 => Just(String::from("..")),
        5 => "[a-cA-C]{1,3}",
    ]
}

// Strategy for atoms that normalization leaves alone
fn plain_atom_strategy() -> impl Strategy<Value = String> {
    "[a-c]{1,3}"
}

fn atoms_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(atom_strategy(), 0..8)
}

const DRIVE_LETTERS: [char; 4] = ['a', 'b', 'c', 'd'];

fn with_case(letter: char, upper: bool) -> Option<Drive> {
    let letter = if upper {
        letter.to_ascii_uppercase()
    } else {
        letter
    };
    Drive::new(letter).ok()
}

fn drive_strategy() -> impl Strategy<Value = Drive> {
    (prop::sample::select(DRIVE_LETTERS.to_vec()), any::<bool>())
        .prop_filter_map("drive", |(letter, upper)| with_case(letter, upper))
}

fn unix_absolute_strategy() -> impl Strategy<Value = UnixAbsolutePath> {
    (atoms_strategy(), any::<bool>()).prop_filter_map("valid path", |(atoms, trailing)| {
        UnixAbsolutePath::from_atoms(atoms, trailing).ok()
    })
}

fn unix_path_strategy() -> impl Strategy<Value = UnixPath> {
    (any::<bool>(), atoms_strategy(), any::<bool>()).prop_filter_map(
        "valid path",
        |(absolute, atoms, trailing)| {
            let kind = if absolute {
                PathKind::Absolute
            } else {
                PathKind::Relative
            };
            UnixPath::from_parts(kind, None, false, atoms, trailing).ok()
        },
    )
}

fn windows_absolute_on(drive: Option<Drive>) -> impl Strategy<Value = WindowsAbsolutePath> {
    (atoms_strategy(), any::<bool>()).prop_filter_map("valid path", move |(atoms, trailing)| {
        WindowsAbsolutePath::from_drive_and_atoms(atoms, drive, trailing).ok()
    })
}

fn windows_absolute_strategy() -> impl Strategy<Value = WindowsAbsolutePath> {
    drive_strategy().prop_flat_map(|drive| windows_absolute_on(Some(drive)))
}

// Two absolute paths on the same drive, each spelling the letter in its own case
fn same_drive_pair_strategy() -> impl Strategy<Value = (WindowsAbsolutePath, WindowsAbsolutePath)>
{
    (
        prop::sample::select(DRIVE_LETTERS.to_vec()),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_flat_map(|(letter, left, right)| {
            (
                windows_absolute_on(with_case(letter, left)),
                windows_absolute_on(with_case(letter, right)),
            )
        })
}

// Two absolute paths on different drives
fn other_drive_pair_strategy() -> impl Strategy<Value = (WindowsAbsolutePath, WindowsAbsolutePath)>
{
    (
        0..DRIVE_LETTERS.len(),
        1..DRIVE_LETTERS.len(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_flat_map(|(first, offset, left, right)| {
            let second = (first + offset) % DRIVE_LETTERS.len();
            (
                windows_absolute_on(with_case(DRIVE_LETTERS[first], left)),
                windows_absolute_on(with_case(DRIVE_LETTERS[second], right)),
            )
        })
}

fn windows_path_strategy() -> impl Strategy<Value = WindowsPath> {
    (
        any::<bool>(),
        prop::option::of(drive_strategy()),
        any::<bool>(),
        atoms_strategy(),
        any::<bool>(),
    )
        .prop_filter_map(
            "valid path",
            |(absolute, drive, anchored, atoms, trailing)| {
                let anchored = anchored && !absolute;
                WindowsPath::from_drive_and_atoms(atoms, drive, absolute, anchored, trailing).ok()
            },
        )
}

// Windows paths whose printed form parses back to the same variant: absolute paths with a drive,
// plain relative paths and driveless anchored paths
fn printable_windows_path_strategy() -> impl Strategy<Value = WindowsPath> {
    prop_oneof![
        (drive_strategy(), atoms_strategy(), any::<bool>()).prop_filter_map(
            "valid path",
            |(drive, atoms, trailing)| {
                WindowsPath::from_drive_and_atoms(atoms, Some(drive), true, false, trailing).ok()
            },
        ),
        (
            prop::option::of(drive_strategy()),
            prop::collection::vec(atom_strategy(), 1..8),
            any::<bool>(),
        )
            .prop_filter_map("valid path", |(drive, atoms, trailing)| {
                WindowsPath::from_drive_and_atoms(atoms, drive, false, false, trailing).ok()
            }),
        (atoms_strategy(), any::<bool>()).prop_filter_map("valid path", |(atoms, trailing)| {
            WindowsPath::from_drive_and_atoms(atoms, None, false, true, trailing).ok()
        }),
    ]
}

/// Rebuilds `path` with its printable form in mind: a bare root never keeps a trailing flag
fn printable<D: Dialect>(path: Path<D>) -> Path<D> {
    if path.has_atoms() {
        path
    } else {
        path.strip_trailing_separator()
    }
}

fn assert_normalized_atoms<D: Dialect>(path: &Path<D>) {
    let atoms = path.atoms();
    let rooted = match path {
        Path::Absolute(_) => true,
        Path::Relative(path) => path.is_anchored(),
    };

    if rooted {
        assert!(atoms.iter().all(|a| a != "." && a != ".."), "{path}");
    } else {
        // Parent atoms only lead, and a self atom only stands alone
        let leading = atoms.iter().take_while(|a| *a == "..").count();
        assert!(atoms[leading..].iter().all(|a| a != ".."), "{path}");
        assert!(atoms == ["."] || atoms.iter().all(|a| a != "."), "{path}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Normalizing twice changes nothing
    #[test]
    fn normalize_is_idempotent(unix in unix_path_strategy(), windows in windows_path_strategy()) {
        let once = unix.normalize();
        prop_assert_eq!(once.normalize(), once);

        let once = windows.normalize();
        prop_assert_eq!(once.normalize(), once);
    }

    // Normalizing keeps the variant, drive and trailing flag and leaves canonical atoms behind
    #[test]
    fn normalize_preserves_everything_but_atoms(windows in windows_path_strategy()) {
        let normalized = windows.normalize();
        prop_assert_eq!(normalized.kind(), windows.kind());
        prop_assert_eq!(normalized.drive(), windows.drive());
        prop_assert_eq!(normalized.has_trailing_separator(), windows.has_trailing_separator());
        if let (Some(before), Some(after)) = (windows.as_relative(), normalized.as_relative()) {
            prop_assert_eq!(before.is_anchored(), after.is_anchored());
        }
        assert_normalized_atoms(&normalized);
    }

    // Printing and parsing a path gives the same path back
    #[test]
    fn unix_display_round_trips(path in unix_path_strategy()) {
        let path = printable(path);
        prop_assert_eq!(UnixPath::parse(&path.to_string()), Ok(path));
    }

    #[test]
    fn windows_display_round_trips(path in printable_windows_path_strategy()) {
        let path = printable(path);
        prop_assert_eq!(WindowsPath::parse(&path.to_string()), Ok(path));
    }

    // Parsing arbitrary text, printing and parsing again is stable
    #[test]
    fn parse_is_stable_under_display(
        unix in r"[a-c./\\]{0,12}",
        windows in r"[a-cC:./\\]{0,12}",
    ) {
        let path = UnixPath::parse(&unix).unwrap();
        prop_assert_eq!(UnixPath::parse(&path.to_string()), Ok(path));

        if let Ok(path) = WindowsPath::parse(&windows) {
            prop_assert_eq!(WindowsPath::parse(&path.to_string()), Ok(path));
        }
    }

    // Resolving relative_to(child, base) against base leads back to child
    #[test]
    fn unix_relative_to_inverts_resolve(
        child in unix_absolute_strategy(),
        base in unix_absolute_strategy(),
    ) {
        let relative = child.relative_to(&base).unwrap();
        let resolved = base.resolve(&Path::Relative(relative)).unwrap().normalize();
        let expected = child.normalize();
        prop_assert_eq!(resolved.atoms(), expected.atoms());
    }

    #[test]
    fn windows_relative_to_inverts_resolve((child, base) in same_drive_pair_strategy()) {
        let relative = child.relative_to(&base).unwrap();
        prop_assert!(relative.drive().is_none());
        prop_assert!(!relative.is_anchored());

        let resolved = base.join(&relative).unwrap().normalize();
        let expected = child.normalize();
        prop_assert_eq!(resolved.atoms(), expected.atoms());
        prop_assert_eq!(resolved.drive(), base.drive());
    }

    #[test]
    fn windows_relative_to_rejects_other_drives((child, base) in other_drive_pair_strategy()) {
        prop_assert!(child.relative_to(&base).is_err());
        prop_assert!(!base.is_ancestor_of(&child));
    }

    // The relative path is minimal: it never ascends past the shared prefix
    #[test]
    fn relative_to_is_minimal(child in unix_absolute_strategy(), base in unix_absolute_strategy()) {
        let relative = child.relative_to(&base).unwrap();
        let ascents = relative.atoms().iter().filter(|a| *a == "..").count();
        let base = base.normalize();
        let child = child.normalize();
        let shared = base
            .atoms()
            .iter()
            .zip(child.atoms())
            .take_while(|(a, b)| a == b)
            .count();
        prop_assert_eq!(ascents, base.atoms().len() - shared);
    }

    // A path is never its own ancestor, and every parent is an ancestor
    #[test]
    fn ancestry_is_consistent(a in unix_absolute_strategy(), c in unix_absolute_strategy()) {
        prop_assert!(!a.is_ancestor_of(&a));
        prop_assert!(!a.is_parent_of(&a));
        if a.is_parent_of(&c) {
            prop_assert!(a.is_ancestor_of(&c));
        }
    }

    #[test]
    fn joining_a_plain_atom_makes_a_parent(
        a in windows_absolute_strategy(),
        name in plain_atom_strategy(),
        more in prop::collection::vec(plain_atom_strategy(), 1..4),
    ) {
        let child = a.join_atoms([name]).unwrap();
        prop_assert!(a.is_parent_of(&child));
        prop_assert!(a.is_ancestor_of(&child));

        let grandchild = child.join_atoms(more).unwrap();
        prop_assert!(!a.is_parent_of(&grandchild));
        prop_assert!(a.is_ancestor_of(&grandchild));
    }

    // Drive letters match whatever their case
    #[test]
    fn drive_matching_ignores_case(atoms in prop::collection::vec(plain_atom_strategy(), 0..4)) {
        let upper =
            WindowsAbsolutePath::from_drive_and_atoms(atoms, Drive::new('C').ok(), false).unwrap();
        let lower = upper.join_drive(Drive::new('c').ok());
        prop_assert_ne!(&upper, &lower);
        prop_assert_eq!(upper.relative_to(&lower).unwrap().to_string(), ".");

        let child = lower.join_atoms(["x"]).unwrap();
        prop_assert!(upper.is_parent_of(&child));
    }

    // Resolving a relative path never changes the base drive
    #[test]
    fn resolve_keeps_base_drive(
        base in windows_absolute_strategy(),
        atoms in prop::collection::vec(atom_strategy(), 1..5),
        anchored in any::<bool>(),
    ) {
        let relative =
            WindowsRelativePath::from_drive_and_atoms(atoms, None, anchored, false).unwrap();
        let resolved = base.resolve(&Path::Relative(relative)).unwrap();
        prop_assert_eq!(resolved.drive(), base.drive());
    }

    // Absolute paths without a drive take the base drive, others keep their own
    #[test]
    fn resolve_absolute_prefers_explicit_drive(
        base in windows_absolute_strategy(),
        path in windows_absolute_strategy(),
    ) {
        let resolved = base.resolve(&Path::Absolute(path.clone())).unwrap();
        prop_assert_eq!(&resolved, &path);

        let driveless: AbsolutePath<_> = path.join_drive(None);
        let resolved = base.resolve(&Path::Absolute(driveless)).unwrap();
        prop_assert_eq!(resolved.drive(), base.drive());
        prop_assert_eq!(resolved.atoms(), path.atoms());
    }
}

#[test]
fn scenarios() {
    let normalize = |s: &str| UnixPath::parse(s).unwrap().normalize().to_string();
    assert_eq!(normalize("/foo/bar/baz/../../qux"), "/foo/qux");
    assert_eq!(normalize("../foo/../../bar"), "../../bar");

    // The receiver is the destination and the argument is the starting point
    let child = UnixAbsolutePath::parse("/foo/qux").unwrap();
    let parent = UnixAbsolutePath::parse("/foo/bar/baz").unwrap();
    assert_eq!(child.relative_to(&parent).unwrap().to_string(), "../../qux");
    assert_eq!(parent.relative_to(&child).unwrap().to_string(), "../bar/baz");

    let base = WindowsAbsolutePath::parse("C:/foo").unwrap();
    let resolve = |s: &str| base.resolve(&WindowsPath::parse(s).unwrap());
    assert_eq!(resolve("bar").unwrap().to_string(), "C:/foo/bar");
    assert_eq!(
        resolve("D:bar"),
        Err(crate::PathError::DriveMismatch {
            left: Drive::new('C').ok(),
            right: Drive::new('D').ok(),
        })
    );

    let base = WindowsAbsolutePath::parse("C:/foo/bar").unwrap();
    let path = WindowsPath::parse("/baz/qux").unwrap();
    assert_eq!(base.resolve(&path).unwrap().to_string(), "C:/baz/qux");

    let path = UnixAbsolutePath::parse("/foo").unwrap();
    let joined = path.join_atoms([".", ".."]).unwrap();
    assert_eq!(joined.normalize().to_string(), "/");
}
