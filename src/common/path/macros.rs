/// Implements the accessors and atom-level transformations shared by [`AbsolutePath`] and
/// [`RelativePath`].
///
/// The target type must provide `drive`, `atoms` and `trailing_separator` fields plus a
/// `with_atoms(&self, atoms, trailing_separator)` constructor that keeps every other property.
///
/// [`AbsolutePath`]: crate::AbsolutePath
/// [`RelativePath`]: crate::RelativePath
macro_rules! impl_atom_path {
    ($ty:ident) => {
        impl<D: $crate::Dialect> $ty<D> {
            /// Returns the atoms of this path in order.
            #[inline]
            pub fn atoms(&self) -> &[String] {
                &self.atoms
            }

            #[inline]
            pub fn has_atoms(&self) -> bool {
                !self.atoms.is_empty()
            }

            #[inline]
            pub fn has_trailing_separator(&self) -> bool {
                self.trailing_separator
            }

            /// Drive specifier of the path, always `None` outside of Windows.
            #[inline]
            pub fn drive(&self) -> Option<$crate::Drive> {
                self.drive
            }

            /// Returns the atom at `index`.
            ///
            /// # Errors
            ///
            /// Fails with [`PathError::UndefinedAtom`](crate::PathError::UndefinedAtom) if
            /// `index` is out of range.
            pub fn atom_at(&self, index: usize) -> $crate::Result<&str> {
                self.atoms
                    .get(index)
                    .map(String::as_str)
                    .ok_or($crate::PathError::UndefinedAtom { index })
            }

            /// Returns the atom at `index`, or `default` if `index` is out of range.
            pub fn atom_at_or<'a>(&'a self, index: usize, default: &'a str) -> &'a str {
                self.atoms.get(index).map_or(default, String::as_str)
            }

            /// Returns up to `len` atoms starting at `start`, or every remaining atom when `len`
            /// is `None`. Out-of-range bounds are clamped.
            pub fn slice_atoms(&self, start: usize, len: Option<usize>) -> &[String] {
                let start = start.min(self.atoms.len());
                let end = match len {
                    Some(len) => start.saturating_add(len).min(self.atoms.len()),
                    None => self.atoms.len(),
                };
                &self.atoms[start..end]
            }

            /// Returns the last atom, if any.
            #[inline]
            pub fn name(&self) -> Option<&str> {
                self.atoms.last().map(String::as_str)
            }

            /// Splits the name on every `.`.
            pub fn name_atoms(&self) -> Vec<&str> {
                self.name().map(|name| name.split('.').collect()).unwrap_or_default()
            }

            /// Returns the name without its final extension.
            pub fn name_without_extension(&self) -> Option<&str> {
                self.name()
                    .map($crate::common::path::helpers::rsplit_file_at_dot)
                    .and_then(|(before, after)| before.or(after))
            }

            /// Returns the part of the name before its first `.`.
            pub fn name_prefix(&self) -> Option<&str> {
                self.name()
                    .map(|name| name.split_once('.').map_or(name, |(prefix, _)| prefix))
            }

            /// Returns the part of the name after its first `.`, if there is one.
            pub fn name_suffix(&self) -> Option<&str> {
                self.name()
                    .and_then(|name| name.split_once('.'))
                    .map(|(_, suffix)| suffix)
            }

            pub fn extension(&self) -> Option<&str> {
                self.name()
                    .map($crate::common::path::helpers::rsplit_file_at_dot)
                    .and_then(|(before, after)| before.and(after))
            }

            #[inline]
            pub fn has_extension(&self) -> bool {
                self.extension().is_some()
            }

            /// Returns true if the string form starts with `needle`. Case-insensitive on Windows.
            pub fn starts_with(&self, needle: &str) -> bool {
                $crate::common::path::helpers::matches_with::<D>(
                    &self.to_string(),
                    needle,
                    |h, n| h.starts_with(n),
                )
            }

            /// Returns true if the string form ends with `needle`. Case-insensitive on Windows.
            pub fn ends_with(&self, needle: &str) -> bool {
                $crate::common::path::helpers::matches_with::<D>(
                    &self.to_string(),
                    needle,
                    |h, n| h.ends_with(n),
                )
            }

            /// Returns true if the string form contains `needle`. Case-insensitive on Windows.
            pub fn contains(&self, needle: &str) -> bool {
                $crate::common::path::helpers::matches_with::<D>(
                    &self.to_string(),
                    needle,
                    |h, n| h.contains(n),
                )
            }

            pub fn name_contains(&self, needle: &str) -> bool {
                self.name().map_or(false, |name| {
                    $crate::common::path::helpers::matches_with::<D>(name, needle, |h, n| {
                        h.contains(n)
                    })
                })
            }

            pub fn name_starts_with(&self, needle: &str) -> bool {
                self.name().map_or(false, |name| {
                    $crate::common::path::helpers::matches_with::<D>(name, needle, |h, n| {
                        h.starts_with(n)
                    })
                })
            }

            /// Appends validated atoms. The result never has a trailing separator.
            pub fn join_atoms<I, S>(&self, atoms: I) -> $crate::Result<Self>
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                let mut joined = self.atoms.clone();
                joined.extend(D::validate_atoms(atoms)?);
                Ok(self.with_atoms(joined, false))
            }

            /// Appends `levels` parent atoms without normalizing.
            pub fn parent(&self, levels: usize) -> Self {
                if levels == 0 {
                    return self.clone();
                }

                let mut atoms = self.atoms.clone();
                atoms.extend(
                    std::iter::repeat($crate::constants::PARENT_ATOM)
                        .take(levels)
                        .map(String::from),
                );
                self.with_atoms(atoms, false)
            }

            pub fn join_trailing_separator(&self) -> Self {
                self.with_atoms(self.atoms.clone(), true)
            }

            pub fn strip_trailing_separator(&self) -> Self {
                self.with_atoms(self.atoms.clone(), false)
            }

            /// Replaces the last atom, or appends `name` when there are no atoms.
            pub fn replace_name(&self, name: &str) -> $crate::Result<Self> {
                D::validate_atom(name)?;

                let mut atoms = self.atoms.clone();
                atoms.pop();
                atoms.push(name.to_string());
                Ok(self.with_atoms(atoms, self.trailing_separator))
            }

            /// Appends `.extension` to the name.
            pub fn join_extension(&self, extension: &str) -> $crate::Result<Self> {
                match self.name() {
                    Some(name) => self.replace_name(&format!("{name}.{extension}")),
                    None => Ok(self.clone()),
                }
            }

            /// Removes the final extension from the name, if it has one.
            pub fn strip_extension(&self) -> Self {
                match (self.has_extension(), self.name_without_extension()) {
                    (true, Some(stem)) => {
                        let mut atoms = self.atoms.clone();
                        atoms.pop();
                        atoms.push(stem.to_string());
                        self.with_atoms(atoms, self.trailing_separator)
                    }
                    _ => self.clone(),
                }
            }

            /// Replaces the final extension of the name, adding one if it has none.
            pub fn replace_extension(&self, extension: &str) -> $crate::Result<Self> {
                match self.name_without_extension() {
                    Some(stem) => self.replace_name(&format!("{stem}.{extension}")),
                    None => Ok(self.clone()),
                }
            }
        }
    };
}
