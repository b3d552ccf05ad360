//! Bit flag sets used across the console.

use bitflags::bitflags;

bitflags! {
    /// Modifier keys currently held down.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Modifiers: u8 {
        const LEFT_SHIFT  = 1 << 0;
        const RIGHT_SHIFT = 1 << 1;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Modifiers::empty()
    }
}

impl Modifiers {
    /// True while either shift key is held.
    pub const fn shift(self) -> bool {
        self.intersects(Modifiers::LEFT_SHIFT.union(Modifiers::RIGHT_SHIFT))
    }
}

bitflags! {
    /// Built-in shell commands that are enabled.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct CommandSet: u8 {
        const HELP     = 1 << 0;
        const CLEAR    = 1 << 1;
        const ECHO     = 1 << 2;
        const CALC     = 1 << 3;
        const TIME     = 1 << 4;
        const SHUTDOWN = 1 << 5;
    }
}

impl Default for CommandSet {
    fn default() -> Self {
        CommandSet::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_from_either_side() {
        assert!(!Modifiers::empty().shift());
        assert!(Modifiers::LEFT_SHIFT.shift());
        assert!(Modifiers::RIGHT_SHIFT.shift());

        let mut mods = Modifiers::LEFT_SHIFT | Modifiers::RIGHT_SHIFT;
        mods.remove(Modifiers::LEFT_SHIFT);
        assert!(mods.shift());
        mods.remove(Modifiers::RIGHT_SHIFT);
        assert!(!mods.shift());
    }

    #[test]
    fn test_default_command_set_is_complete() {
        let set = CommandSet::default();
        assert!(set.contains(CommandSet::CALC | CommandSet::SHUTDOWN));
    }
}
