use phf::phf_map;

/// Atomic numbers of the chemical elements, keyed by symbol.
pub static ATOMIC_NUMBERS: phf::Map<&'static str, u8> = phf_map! {
    "H" => 1u8, "He" => 2u8, "Li" => 3u8, "Be" => 4u8, "B" => 5u8, "C" => 6u8,
    "N" => 7u8, "O" => 8u8, "F" => 9u8, "Ne" => 10u8, "Na" => 11u8, "Mg" => 12u8,
    "Al" => 13u8, "Si" => 14u8, "P" => 15u8, "S" => 16u8, "Cl" => 17u8, "Ar" => 18u8,
    "K" => 19u8, "Ca" => 20u8, "Sc" => 21u8, "Ti" => 22u8, "V" => 23u8, "Cr" => 24u8,
    "Mn" => 25u8, "Fe" => 26u8, "Co" => 27u8, "Ni" => 28u8, "Cu" => 29u8, "Zn" => 30u8,
    "Ga" => 31u8, "Ge" => 32u8, "As" => 33u8, "Se" => 34u8, "Br" => 35u8, "Kr" => 36u8,
    "Rb" => 37u8, "Sr" => 38u8, "Y" => 39u8, "Zr" => 40u8, "Nb" => 41u8, "Mo" => 42u8,
    "Tc" => 43u8, "Ru" => 44u8, "Rh" => 45u8, "Pd" => 46u8, "Ag" => 47u8, "Cd" => 48u8,
    "In" => 49u8, "Sn" => 50u8, "Sb" => 51u8, "Te" => 52u8, "I" => 53u8, "Xe" => 54u8,
    "Cs" => 55u8, "Ba" => 56u8, "La" => 57u8, "Ce" => 58u8, "Pr" => 59u8, "Nd" => 60u8,
    "Pm" => 61u8, "Sm" => 62u8, "Eu" => 63u8, "Gd" => 64u8, "Tb" => 65u8, "Dy" => 66u8,
    "Ho" => 67u8, "Er" => 68u8, "Tm" => 69u8, "Yb" => 70u8, "Lu" => 71u8, "Hf" => 72u8,
    "Ta" => 73u8, "W" => 74u8, "Re" => 75u8, "Os" => 76u8, "Ir" => 77u8, "Pt" => 78u8,
    "Au" => 79u8, "Hg" => 80u8, "Tl" => 81u8, "Pb" => 82u8, "Bi" => 83u8, "Po" => 84u8,
    "At" => 85u8, "Rn" => 86u8, "Fr" => 87u8, "Ra" => 88u8, "Ac" => 89u8, "Th" => 90u8,
    "Pa" => 91u8, "U" => 92u8, "Np" => 93u8, "Pu" => 94u8, "Am" => 95u8, "Cm" => 96u8,
    "Bk" => 97u8, "Cf" => 98u8, "Es" => 99u8, "Fm" => 100u8, "Md" => 101u8, "No" => 102u8,
    "Lr" => 103u8, "Rf" => 104u8, "Db" => 105u8, "Sg" => 106u8, "Bh" => 107u8, "Hs" => 108u8,
    "Mt" => 109u8, "Ds" => 110u8, "Rg" => 111u8, "Cn" => 112u8, "Nh" => 113u8, "Fl" => 114u8,
    "Mc" => 115u8, "Lv" => 116u8, "Ts" => 117u8, "Og" => 118u8,
};

/// Atomic number of an element symbol, or 0 if the symbol is not an element
/// (for instance a dummy or user-defined species).
pub fn atomic_number(symbol: &str) -> u8 {
    ATOMIC_NUMBERS.get(symbol).copied().unwrap_or(0)
}
