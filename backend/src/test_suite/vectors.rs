//! Fixed vectors for the toy (N = 11) and production-sized (N = 401) rings.

/// Dense operand for N = 11 in the `N + 7` layout (tail mirrors the head).
pub const A11: [u16; 18] = [8, 25, 22, 20, 12, 24, 15, 19, 12, 19, 16, 8, 25, 22, 20, 12, 24, 15];

/// Sparse ternary for N = 11: +1 at {2, 3, 4}, -1 at {0, 5, 7}.
pub const B11: [u16; 6] = [2, 3, 4, 0, 5, 7];

/// Ternary message added to `A11 * B11` before reduction modulo 32.
pub const C11: [i16; 11] = [-1, 0, 0, 1, -1, 0, 0, 0, -1, 1, 1];

pub const Q11: u32 = 32;

/// `(A11 * B11 + C11) mod 32`.
pub const R11: [u16; 11] = [14, 11, 26, 24, 14, 16, 30, 7, 25, 6, 19];

/// Product-form weights for N = 401: 8/8/6 coefficients of each sign.
pub const B401_LENS: [usize; 3] = [16, 16, 12];

pub const Q401: u32 = 2048;

/// Public-key coefficients for N = 401, uniform modulo 2048 (tail not included).
pub const A401: [u16; 401] = [
    859, 234, 181, 840, 1411, 938, 1022, 1573, 1294, 1962, 1467, 555, 1203, 284, 408, 1386,
    846, 1228, 511, 463, 28, 1105, 153, 252, 1394, 733, 1312, 1678, 1340, 1008, 1350, 144,
    721, 1630, 145, 1615, 1482, 8, 5, 970, 1489, 1319, 1263, 1057, 993, 924, 1281, 109,
    722, 1054, 881, 953, 84, 1242, 329, 794, 571, 1673, 1793, 153, 1990, 1844, 1397, 790,
    1467, 596, 1614, 1620, 1812, 1679, 1469, 459, 413, 1768, 127, 1493, 1106, 122, 429, 1724,
    512, 4, 672, 790, 957, 1976, 957, 624, 422, 656, 400, 499, 442, 1682, 1172, 16,
    976, 1474, 641, 1172, 1658, 1362, 453, 678, 1056, 600, 615, 1054, 107, 61, 1137, 1718,
    695, 633, 1922, 748, 397, 399, 1094, 355, 1007, 177, 1086, 150, 2007, 1527, 1316, 652,
    1943, 1766, 1904, 1007, 1636, 611, 23, 94, 860, 2004, 250, 1690, 1986, 1331, 166, 1509,
    1380, 230, 1301, 1317, 69, 936, 530, 1862, 1965, 1666, 657, 1551, 1133, 1352, 1651, 650,
    1559, 112, 2015, 1335, 1793, 1140, 1958, 403, 1939, 1645, 3, 614, 1440, 1134, 1734, 661,
    1114, 571, 1852, 1459, 188, 178, 1929, 1495, 938, 1142, 1627, 1591, 1725, 1914, 1799, 1459,
    1355, 883, 493, 447, 1743, 1508, 1628, 1852, 1302, 975, 1526, 975, 2039, 328, 392, 365,
    1830, 1590, 1003, 923, 1113, 1415, 1679, 1732, 430, 305, 1756, 765, 320, 1403, 1270, 1905,
    1449, 1022, 446, 1316, 17, 1189, 799, 1538, 879, 2042, 447, 70, 1004, 77, 1376, 1996,
    520, 997, 1077, 291, 592, 1573, 159, 343, 257, 1400, 1789, 563, 866, 1407, 1711, 1084,
    591, 577, 653, 425, 511, 1115, 1218, 1142, 1671, 1411, 1527, 1722, 1387, 1274, 242, 1844,
    544, 85, 1244, 621, 1497, 1959, 988, 1480, 1631, 1138, 386, 939, 156, 1090, 496, 735,
    385, 842, 1197, 707, 343, 551, 997, 1044, 1140, 215, 1255, 1473, 14, 597, 935, 1025,
    349, 652, 418, 1800, 1978, 1247, 1758, 16, 289, 1470, 844, 1552, 1168, 1972, 340, 505,
    1217, 1033, 1846, 223, 290, 1499, 166, 990, 1452, 1865, 1759, 787, 1357, 1789, 1259, 1954,
    42, 1899, 792, 1342, 1128, 1829, 335, 453, 595, 1052, 823, 1353, 709, 831, 338, 1263,
    1438, 1345, 427, 1673, 30, 1948, 43, 928, 1441, 562, 496, 577, 34, 576, 155, 87,
    1903, 53, 1165, 265, 598, 1535, 811, 1192, 778, 979, 1832, 501, 1341, 20, 833, 1719,
    1371, 1142, 1894, 1618, 692, 343, 1639, 1053, 1195, 581, 1734, 535, 944, 552, 145, 368,
    566,
];

/// Product-form index block `[p1+ | p1- | p2+ | p2- | p3+ | p3-]` for N = 401.
pub const B401: [u16; 44] = [
    355, 228, 85, 245, 149, 38, 184, 282, 277, 178, 301, 303, 348, 391, 157, 130,
    356, 388, 311, 82, 147, 274, 54, 193, 281, 15, 400, 113, 371, 344, 327, 203,
    125, 190, 35, 180, 138, 104, 121, 329, 250, 32, 1, 182,
];

/// `A401 * (p1*p2 + p3) mod (X^401 - 1, 2048)`.
pub const R401: [u16; 401] = [
    971, 366, 113, 994, 789, 1333, 17, 1179, 1585, 46, 927, 1699, 1163, 914, 1267, 1539,
    1418, 187, 1968, 53, 526, 367, 1521, 976, 1090, 1874, 948, 1, 1747, 1120, 1773, 1584,
    317, 162, 1853, 1387, 870, 1466, 1532, 201, 758, 1140, 791, 1521, 664, 690, 1635, 1355,
    1354, 837, 1343, 628, 1534, 846, 1741, 815, 1009, 1519, 1582, 121, 1306, 1722, 1586, 1881,
    1869, 204, 676, 1292, 1073, 1862, 344, 879, 237, 436, 1131, 1552, 195, 1348, 662, 1604,
    766, 422, 65, 1187, 293, 1765, 352, 1458, 1857, 1072, 1012, 1304, 855, 270, 767, 227,
    945, 1727, 135, 699, 1595, 1802, 1516, 758, 413, 1200, 1462, 2040, 1014, 937, 57, 1677,
    1110, 942, 16, 1242, 574, 1377, 1567, 589, 165, 1445, 1310, 1484, 1623, 894, 1161, 434,
    1796, 1963, 2015, 1843, 519, 1019, 646, 1044, 1829, 2032, 1078, 293, 1421, 936, 889, 205,
    1751, 1329, 1438, 328, 267, 1927, 1074, 166, 1950, 517, 564, 1225, 835, 1414, 1368, 1935,
    1346, 226, 1940, 1859, 980, 1829, 1625, 323, 1759, 941, 988, 834, 933, 2003, 1874, 1195,
    1590, 597, 2015, 799, 958, 1642, 1629, 1473, 1117, 1661, 333, 849, 1689, 1769, 1912, 1784,
    855, 1928, 2047, 999, 901, 623, 503, 2000, 901, 1433, 563, 1873, 729, 230, 524, 1747,
    2002, 2035, 220, 492, 771, 1529, 1927, 943, 1248, 1479, 591, 191, 1473, 1477, 1017, 1219,
    1375, 1231, 1157, 1475, 42, 1669, 129, 1074, 1156, 2027, 213, 339, 607, 1566, 428, 950,
    709, 378, 1412, 1068, 588, 404, 380, 385, 1455, 676, 684, 264, 1595, 932, 635, 895,
    1165, 339, 350, 98, 703, 693, 275, 1928, 561, 799, 871, 770, 396, 1980, 1091, 668,
    2001, 941, 1061, 1758, 931, 1730, 1217, 604, 1548, 433, 1111, 1403, 130, 691, 1729, 566,
    1140, 314, 1319, 1942, 1129, 1927, 1850, 828, 783, 21, 1950, 1134, 458, 1920, 1252, 1129,
    1722, 284, 1595, 961, 1238, 1659, 1184, 1633, 295, 2002, 1283, 1951, 930, 1800, 974, 1459,
    404, 610, 1364, 1060, 1485, 1994, 1791, 89, 930, 717, 1853, 1278, 1719, 125, 451, 1829,
    505, 195, 552, 1059, 963, 1146, 1045, 448, 780, 1912, 479, 1981, 232, 943, 1782, 19,
    307, 1192, 369, 286, 84, 703, 1420, 1276, 1201, 440, 879, 598, 1896, 1986, 1258, 1574,
    1747, 1969, 423, 1723, 1827, 395, 389, 1012, 302, 2018, 10, 10, 1226, 2021, 1116, 206,
    794, 1962, 1038, 94, 1001, 1624, 1739, 1206, 1625, 1899, 1553, 725, 1195, 1091, 1839, 464,
    398,
];
