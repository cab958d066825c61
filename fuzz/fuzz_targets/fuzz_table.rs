use afl::fuzz;
use std::collections::HashMap;
use symtab::sema::{ExpType, NOT_FOUND, SymbolTable};

const SCOPES: [&str; 4] = ["global", "f", "g", "f.block"];
const NAMES: [&str; 4] = ["x", "y", "n", "main"];
const TYPES: [ExpType; 4] = [
    ExpType::Void,
    ExpType::Integer,
    ExpType::Boolean,
    ExpType::IntegerArray,
];

fn main() {
    fuzz!(|data: &[u8]| {
        let mut table = SymbolTable::new();
        // (scope, name) -> (type, location, lines) at first insertion
        let mut model: HashMap<(usize, usize), (ExpType, i32, Vec<u32>)> = HashMap::new();

        for chunk in data.chunks_exact(3) {
            let scope = (chunk[0] & 0x3) as usize;
            let name = ((chunk[0] >> 2) & 0x3) as usize;
            let line = chunk[1] as u32 + 1;
            let loc = chunk[2] as i32;

            if chunk[0] & 0x80 != 0 {
                let parent = ((chunk[0] >> 4) & 0x3) as usize;
                table.declare_scope(SCOPES[scope], SCOPES[parent]);
                continue;
            }

            let ty = TYPES[(chunk[2] & 0x3) as usize];
            table.insert(SCOPES[scope], NAMES[name], ty, line, loc);
            model
                .entry((scope, name))
                .or_insert_with(|| (ty, loc, Vec::new()))
                .2
                .push(line);
        }

        for scope in 0..SCOPES.len() {
            for name in 0..NAMES.len() {
                let local = table.lookup_excluding_parent(SCOPES[scope], NAMES[name]);
                match model.get(&(scope, name)) {
                    Some((ty, loc, lines)) => {
                        assert_eq!(local, *loc);
                        let record = table.resolve_local(SCOPES[scope], NAMES[name]).unwrap();
                        assert_eq!(record.ty(), ty);
                        assert_eq!(record.lines(), lines.as_slice());
                        assert_ne!(table.lookup(SCOPES[scope], NAMES[name]), NOT_FOUND);
                    }
                    None => assert_eq!(local, NOT_FOUND),
                }
            }
        }

        let mut listing = Vec::new();
        table.dump(&mut listing).unwrap();
    });
}
