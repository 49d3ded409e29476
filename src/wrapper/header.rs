/// Fixed preamble written once at the top of every generated wrapper file.
///
/// Trailing spaces on the banner lines are part of the text; the generated
/// file is compared byte-for-byte across runs.
pub const HEADER: &str = concat!(
    "/*\n",
    "   *** AUTOMATICALLY CREATED: DO NOT EDIT THIS FILE ***   \n",
    "\n",
    "   This file is part of the RELXILL model code.\n",
    "\n",
    "   RELXILL is free software: you can redistribute it and/or modify it\n",
    "   under the terms of the GNU General Public License as published by\n",
    "   the Free Software Foundation, either version 3 of the License, or\n",
    "   any later version.\n",
    "\n",
    "   RELXILL is distributed in the hope that it will be useful,\n",
    "   but WITHOUT ANY WARRANTY; without even the implied warranty of\n",
    "   MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the\n",
    "   GNU General Public License for more details.\n",
    "   For a copy of the GNU General Public License see\n",
    "   <http://www.gnu.org/licenses/>.\n",
    "\n",
    "    Copyright 2020 Thomas Dauser, Remeis Observatory & ECAP\n",
    "       \n",
    "    *** AUTOMATICALLY CREATED: DO NOT EDIT THIS FILE ***       \n",
    "*/\n",
    "\n",
    "#include \"cppmodels.h\"\n",
    "#include \"cppparameters.h\"\n",
);
